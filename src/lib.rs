pub mod aggregate;
pub mod cli;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;

pub mod prelude {
    pub use crate::model::record::{Column, TestCaseRecord};
    pub use crate::model::table::Table;
    pub use crate::pipeline::stage4_report::MetricsReport;
}
