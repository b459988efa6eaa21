//! Output formats for parsed decision trees

pub mod dump;
pub mod treeviz;
pub mod xml;

pub use dump::to_weka_str;
pub use treeviz::to_treeviz_str;
pub use xml::to_xml_str;

/// Format a threshold the way the source dumps print doubles: integral
/// values keep one decimal (`1.0`, not `1`), everything else uses the
/// shortest round-trippable form. Keeps emitted text re-parseable to the
/// exact same f64.
pub fn format_threshold(threshold: f64) -> String {
    if threshold.is_finite() && threshold.fract() == 0.0 {
        format!("{:.1}", threshold)
    } else {
        format!("{}", threshold)
    }
}
