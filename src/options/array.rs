use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Array", inline)]
#[serde(default)]
/// How fresh arrays are generated on reset.
pub struct ArrayOptions {
    /// Number of values.
    #[schemars(title = "Length", range(min = 1, max = 1024))]
    pub length: usize,
    /// Smallest generated value (inclusive).
    #[schemars(title = "Minimum Value")]
    pub min_value: u32,
    /// Largest generated value (inclusive).
    #[schemars(title = "Maximum Value")]
    pub max_value: u32,
    /// Fixed RNG seed; `None` seeds from the OS.
    #[schemars(skip)]
    pub seed: Option<u64>,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            length: 64,
            min_value: 100,
            max_value: 600,
            seed: None,
        }
    }
}
