//! Demonstration run: count the words of a sample project description and
//! print the count to stdout. Diagnostics go to the logger, not stdout.

use count_logging::{count_info, initialize, LogDestination};
use wordcount_core::count_words;

/// Project description measured by the demonstration run.
const SAMPLE_DESCRIPTION: &str = "HydroEdge es un innovador sistema automatizado de hidroponia que integra aplicación móvil, sensores IoT y microcontrolador. Permite monitorear y controlar parámetros de crecimiento, ajustando el ambiente y la nutrición a través de lógica de backend.";

fn main() {
    initialize(LogDestination::Terminal);

    let words = count_words(SAMPLE_DESCRIPTION);
    count_info!(
        "CountWords words={} input_len={}",
        words,
        SAMPLE_DESCRIPTION.len()
    );
    println!("{words}");
}
