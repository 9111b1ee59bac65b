//! Deployment secret plan definition and generation.

use vibsdk_types::{Result, SecretName, VibsdkError};

use crate::generator;

/// Specification for a single deployment secret.
#[derive(Debug, Clone)]
pub struct SecretSpec {
    name: SecretName,
    length: usize,
    description: String,
}

impl SecretSpec {
    /// Create a new secret specification.
    pub fn new(name: SecretName, length: usize, description: impl Into<String>) -> Self {
        Self {
            name,
            length,
            description: description.into(),
        }
    }

    /// Get the secret role label.
    pub fn name(&self) -> &SecretName {
        &self.name
    }

    /// Get the target value length in characters.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Get the human-readable role description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Generate a fresh value for this secret.
    ///
    /// # Errors
    ///
    /// Returns an error if the specification requests a zero-length value.
    pub fn generate(&self) -> Result<GeneratedSecret> {
        if self.length == 0 {
            return Err(VibsdkError::Secret(format!(
                "Secret '{}' has no length",
                self.name
            )));
        }

        let value = generator::alphanumeric(self.length);

        Ok(GeneratedSecret {
            spec: self.clone(),
            value,
        })
    }
}

/// A secret specification paired with its generated value.
#[derive(Debug, Clone)]
pub struct GeneratedSecret {
    spec: SecretSpec,
    value: String,
}

impl GeneratedSecret {
    /// Get the secret role label.
    pub fn name(&self) -> &SecretName {
        self.spec.name()
    }

    /// Get the human-readable role description.
    pub fn description(&self) -> &str {
        self.spec.description()
    }

    /// Get the generated value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Render the secret as a `.env`-style line: `NAME="value"`.
    pub fn env_line(&self) -> String {
        format!("{}=\"{}\"", self.name(), self.value)
    }
}

/// Ordered list of secrets to generate for a deployment.
pub struct SecretPlan {
    specs: Vec<SecretSpec>,
}

impl SecretPlan {
    /// The fixed secret plan for a VibSDK deployment.
    ///
    /// Secret names here are statically known to be valid, so construction
    /// cannot fail.
    #[must_use]
    pub fn deployment() -> Self {
        let spec = |name: &str, length: usize, description: &str| {
            let name = SecretName::new(name).expect("static secret name is valid");
            SecretSpec::new(name, length, description)
        };

        Self {
            specs: vec![
                spec(
                    "JWT_SECRET",
                    64,
                    "Used for session management and JWT token signing (64 characters)",
                ),
                spec(
                    "WEBHOOK_SECRET",
                    32,
                    "Used for webhook authentication (32 characters)",
                ),
                spec(
                    "SECRETS_ENCRYPTION_KEY",
                    32,
                    "Used for encrypting stored secrets (32 characters)",
                ),
            ],
        }
    }

    /// Get the specifications in plan order.
    pub fn specs(&self) -> &[SecretSpec] {
        &self.specs
    }

    /// Get the number of secrets in the plan.
    pub fn count(&self) -> usize {
        self.specs.len()
    }

    /// Generate a fresh value for every secret in the plan, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any specification is invalid.
    pub fn generate(&self) -> Result<Vec<GeneratedSecret>> {
        let mut generated = Vec::with_capacity(self.specs.len());

        for spec in &self.specs {
            tracing::debug!("Generating secret: {}", spec.name());
            generated.push(spec.generate()?);
        }

        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_plan_order_and_lengths() {
        let plan = SecretPlan::deployment();
        assert_eq!(plan.count(), 3);

        let specs = plan.specs();
        assert_eq!(specs[0].name().as_str(), "JWT_SECRET");
        assert_eq!(specs[0].length(), 64);
        assert_eq!(specs[1].name().as_str(), "WEBHOOK_SECRET");
        assert_eq!(specs[1].length(), 32);
        assert_eq!(specs[2].name().as_str(), "SECRETS_ENCRYPTION_KEY");
        assert_eq!(specs[2].length(), 32);
    }

    #[test]
    fn deployment_plan_descriptions() {
        let plan = SecretPlan::deployment();
        let specs = plan.specs();

        assert_eq!(
            specs[0].description(),
            "Used for session management and JWT token signing (64 characters)"
        );
        assert_eq!(
            specs[1].description(),
            "Used for webhook authentication (32 characters)"
        );
        assert_eq!(
            specs[2].description(),
            "Used for encrypting stored secrets (32 characters)"
        );
    }

    #[test]
    fn generate_produces_values_of_spec_length() {
        let plan = SecretPlan::deployment();
        let secrets = plan.generate().unwrap();

        assert_eq!(secrets.len(), 3);
        assert_eq!(secrets[0].value().len(), 64);
        assert_eq!(secrets[1].value().len(), 32);
        assert_eq!(secrets[2].value().len(), 32);
    }

    #[test]
    fn zero_length_spec_is_rejected() {
        let spec = SecretSpec::new(SecretName::new("EMPTY_SECRET").unwrap(), 0, "nothing");
        assert!(spec.generate().is_err());
    }

    #[test]
    fn env_line_format() {
        let spec = SecretSpec::new(SecretName::new("JWT_SECRET").unwrap(), 8, "test");
        let secret = spec.generate().unwrap();

        let line = secret.env_line();
        assert!(line.starts_with("JWT_SECRET=\""));
        assert!(line.ends_with('"'));
        assert_eq!(line.len(), "JWT_SECRET=\"\"".len() + 8);
    }
}
