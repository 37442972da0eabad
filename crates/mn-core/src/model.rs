//! Memristor model families.
//!
//! A family names the subcircuit file it is compiled into and the folder
//! its simulation runs are grouped under.

use core::fmt;
use core::str::FromStr;

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModelFamily {
    Pershin,
    Vourkas,
    Biolek,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 3] = [Self::Pershin, Self::Vourkas, Self::Biolek];

    /// Lowercase identifier, e.g. `pershin`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Pershin => "pershin",
            Self::Vourkas => "vourkas",
            Self::Biolek => "biolek",
        }
    }

    /// File name of the compiled subcircuit, e.g. `pershin.sub`.
    pub fn subcircuit_file_name(self) -> String {
        format!("{}.sub", self.slug())
    }

    /// File name of the compiled top-level circuit.
    pub fn circuit_file_name(self) -> String {
        format!("{}_circuit_file.cir", self.slug())
    }

    /// Folder that groups every run of this family.
    pub fn simulations_folder(self) -> String {
        format!("{}_simulations", self.slug())
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ModelFamily {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or(CoreError::InvalidArg {
                what: "unknown memristor model family",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_family() {
        assert_eq!(ModelFamily::Pershin.subcircuit_file_name(), "pershin.sub");
        assert_eq!(
            ModelFamily::Vourkas.circuit_file_name(),
            "vourkas_circuit_file.cir"
        );
        assert_eq!(
            ModelFamily::Biolek.simulations_folder(),
            "biolek_simulations"
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Pershin".parse::<ModelFamily>(), Ok(ModelFamily::Pershin));
        assert_eq!(" vourkas ".parse::<ModelFamily>(), Ok(ModelFamily::Vourkas));
        assert!("hp".parse::<ModelFamily>().is_err());
    }
}
