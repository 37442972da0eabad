//! Subcircuit building blocks.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NetlistError, NetlistResult};

/// The six coefficients shared by every device instance in a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub alpha: f64,
    pub beta: f64,
    pub rinit: f64,
    pub roff: f64,
    pub ron: f64,
    pub vt: f64,
}

impl ModelParameters {
    /// Name/value pairs in emission order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("rinit", self.rinit),
            ("roff", self.roff),
            ("ron", self.ron),
            ("vt", self.vt),
        ]
    }
}

/// `alpha=0 beta=500000 ...`, values in their plain `Display` form.
impl fmt::Display for ModelParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

pub const DEFAULT_SUBCIRCUIT_NAME: &str = "memristor";

/// Terminal order every device template and instance line is wired for:
/// plus, minus, state.
pub const MEMRISTOR_TERMINALS: [&str; 3] = ["pl", "mn", "x"];

/// Subcircuit header: name, terminal nodes, and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcircuitDef {
    pub name: String,
    pub nodes: Vec<String>,
    pub parameters: ModelParameters,
}

impl SubcircuitDef {
    /// The standard three-terminal memristor: `pl`, `mn` and state node `x`.
    pub fn memristor(parameters: ModelParameters) -> Self {
        Self {
            name: DEFAULT_SUBCIRCUIT_NAME.to_string(),
            nodes: MEMRISTOR_TERMINALS.iter().map(|node| node.to_string()).collect(),
            parameters,
        }
    }

    /// Instances pass exactly three nodes and the templates refer to the
    /// terminals by name, so anything but `pl mn x` would miswire.
    pub fn check_terminals(&self) -> NetlistResult<()> {
        if self.nodes.iter().map(String::as_str).eq(MEMRISTOR_TERMINALS) {
            Ok(())
        } else {
            Err(NetlistError::TerminalMismatch {
                expected: MEMRISTOR_TERMINALS.join(" "),
                found: self.nodes.join(" "),
            })
        }
    }

    /// `.subckt {name} {nodes} PARAMS: {parameters}`
    pub fn definition_line(&self) -> String {
        format!(
            ".subckt {} {} PARAMS: {}",
            self.name,
            self.nodes.join(" "),
            self.parameters
        )
    }
}

/// A `.model` declaration some component depends on, e.g. `.model D d`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDependency {
    pub name: String,
    pub kind: String,
}

impl ModelDependency {
    pub fn diode() -> Self {
        Self {
            name: "D".into(),
            kind: "d".into(),
        }
    }

    pub fn line(&self) -> String {
        format!(".model {} {}", self.name, self.kind)
    }
}

/// A behavioural source whose current or voltage is an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviouralSource {
    pub name: String,
    pub n_plus: String,
    pub n_minus: String,
    pub expression: String,
}

impl BehaviouralSource {
    pub fn line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.n_plus, self.n_minus, self.expression
        )
    }
}

/// A passive or auxiliary element inside the subcircuit.
///
/// Emitted as `name n+ n- [value] [extra] [model]`, skipping absent fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub n_plus: String,
    pub n_minus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Component {
    pub fn new(name: &str, n_plus: &str, n_minus: &str) -> Self {
        Self {
            name: name.into(),
            n_plus: n_plus.into(),
            n_minus: n_minus.into(),
            value: None,
            extra: None,
            model: None,
        }
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn extra(mut self, extra: &str) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn line(&self) -> String {
        let mut line = format!("{} {} {}", self.name, self.n_plus, self.n_minus);
        if let Some(value) = self.value {
            line.push_str(&format!(" {value}"));
        }
        if let Some(extra) = &self.extra {
            line.push(' ');
            line.push_str(extra);
        }
        if let Some(model) = &self.model {
            line.push(' ');
            line.push_str(model);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ModelParameters {
        ModelParameters {
            alpha: 0.0,
            beta: 500e3,
            rinit: 200e3,
            roff: 200e3,
            ron: 2e3,
            vt: 0.6,
        }
    }

    #[test]
    fn parameters_render_plainly() {
        assert_eq!(
            params().to_string(),
            "alpha=0 beta=500000 rinit=200000 roff=200000 ron=2000 vt=0.6"
        );
    }

    #[test]
    fn definition_line() {
        let def = SubcircuitDef::memristor(params());
        assert_eq!(
            def.definition_line(),
            ".subckt memristor pl mn x PARAMS: alpha=0 beta=500000 rinit=200000 roff=200000 ron=2000 vt=0.6"
        );
    }

    #[test]
    fn terminals_must_match_template_wiring() {
        let mut def = SubcircuitDef::memristor(params());
        def.check_terminals().unwrap();

        def.nodes = vec!["pl".into(), "mn".into()];
        assert_eq!(
            def.check_terminals(),
            Err(NetlistError::TerminalMismatch {
                expected: "pl mn x".into(),
                found: "pl mn".into(),
            })
        );

        def.nodes = vec!["a".into(), "b".into(), "s".into()];
        assert!(def.check_terminals().is_err());
    }

    #[test]
    fn component_skips_absent_fields() {
        assert_eq!(
            Component::new("Cx", "x", "0").value(1.0).extra("IC={Rinit}").line(),
            "Cx x 0 1 IC={Rinit}"
        );
        assert_eq!(
            Component::new("d1", "aux1", "x").model("D").line(),
            "d1 aux1 x D"
        );
        assert_eq!(
            Component::new("R0", "pl", "mn").value(1e12).line(),
            "R0 pl mn 1000000000000"
        );
    }
}
