use crate::pipeline::stage4_report::MetricsReport;

pub fn render_report(report: &MetricsReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "- Number of test cases executed: {}\n",
        report.executed
    ));
    out.push_str(&format!("- Test cases passed: {}\n", report.passed));
    out.push_str(&format!("- Test cases failed: {}\n", report.failed));
    out.push_str(&format!(
        "- Average test case execution time: {:.2} seconds\n",
        report.mean_duration
    ));
    out.push_str(&format!(
        "- Maximum test case execution time: {:.2} seconds\n",
        report.max_duration
    ));
    out.push_str(&format!(
        "- Minimum test case execution time: {:.2} seconds\n",
        report.min_duration
    ));
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
