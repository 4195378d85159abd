//! `svgcomp name`: print derived component names.

use crate::convert::{check_component_name, normalize};
use crate::log;

/// Print one derived name per input, warning about unusable ones.
pub fn run_name(files: &[String]) {
    for file in files {
        let name = normalize(file);
        if let Err(e) = check_component_name(&name) {
            log!("warning"; "{}: {}", file, e);
        }
        println!("{name}");
    }
}
