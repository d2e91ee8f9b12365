pub mod targets {
    pub const NORMAL_FORM: &str = "normal form";
    pub const VARIABLE_MAP: &str = "variable map";
    pub const CONVERSION: &str = "conversion";
    pub const COMPUTATION: &str = "computation";
    pub const SOLVER: &str = "solver";
}
