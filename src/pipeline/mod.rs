pub mod stage1_load;
pub mod stage2_write;
pub mod stage3_export;
pub mod stage4_report;
