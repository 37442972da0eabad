//! Default device templates per model family.

use mn_core::ModelFamily;
use serde::{Deserialize, Serialize};

use crate::error::{NetlistError, NetlistResult};
use crate::model::{BehaviouralSource, Component, ModelDependency};

const STATE_CURRENT: &str = "I='(f1(V(pl,mn))>0) && (V(x)<Roff) ? {f1(V(pl,mn))}: \
(f1(V(pl,mn))<0) && (V(x)>Ron) ? {f1(V(pl,mn))}: {0}'";

const SWITCHING_FUNCTION: &str = ".func f1(y)={beta*y+0.5*(alpha-beta)*(abs(y+Vt)-abs(y-Vt))}";

/// Everything inside a subcircuit besides its header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceTemplate {
    #[serde(default)]
    pub dependencies: Vec<ModelDependency>,
    #[serde(default)]
    pub sources: Vec<BehaviouralSource>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub control_commands: Vec<String>,
}

impl DeviceTemplate {
    pub fn for_model(model: ModelFamily) -> NetlistResult<Self> {
        let components = match model {
            ModelFamily::Pershin => vec![
                Component::new("Cx", "x", "0").value(1.0).extra("IC={Rinit}"),
                Component::new("R0", "pl", "mn").value(1e12),
                Component::new("Rmem", "pl", "mn").extra("r={V(x)}"),
            ],
            ModelFamily::Vourkas => vec![
                Component::new("Cx", "x", "0").value(1.0).extra("IC={Rinit}"),
                Component::new("Rmem", "pl", "mn").extra("r={V(x)}"),
                Component::new("d1", "aux1", "x").model("D"),
                Component::new("d2", "x", "aux2").model("D"),
                Component::new("v1", "aux1", "0").extra("{Ron}"),
                Component::new("v2", "aux2", "0").extra("{Roff}"),
                Component::new("Raux", "pl", "mn").value(1e12),
            ],
            ModelFamily::Biolek => return Err(NetlistError::UnsupportedModel { model }),
        };

        let dependencies = match model {
            ModelFamily::Vourkas => vec![ModelDependency::diode()],
            _ => Vec::new(),
        };

        Ok(Self {
            dependencies,
            sources: vec![BehaviouralSource {
                name: "Bx".into(),
                n_plus: "0".into(),
                n_minus: "x".into(),
                expression: STATE_CURRENT.into(),
            }],
            components,
            control_commands: vec![SWITCHING_FUNCTION.into()],
        })
    }

    /// Every component that names a model must have a matching `.model`.
    /// SPICE names are case-insensitive.
    pub fn check_dependencies(&self) -> NetlistResult<()> {
        for component in &self.components {
            let Some(model) = &component.model else {
                continue;
            };
            let declared = self
                .dependencies
                .iter()
                .any(|dep| dep.name.eq_ignore_ascii_case(model));
            if !declared {
                return Err(NetlistError::MissingModelDependency {
                    component: component.name.clone(),
                    model: model.clone(),
                });
            }
        }
        Ok(())
    }
}
