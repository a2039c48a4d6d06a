/// Parameters for one analysis run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Start town for the shortest route and path enumeration
    pub from: String,
    /// Goal town for the shortest route and path enumeration
    pub to: String,
    /// Distance in km every road of a town must stay under
    pub threshold: u32,
    /// Re-run every analysis under measurement
    pub timing: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            from: "Madrid".to_string(),
            to: "Getafe".to_string(),
            threshold: 15,
            timing: true,
        }
    }
}
