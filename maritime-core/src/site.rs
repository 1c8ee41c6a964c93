use serde::{Deserialize, Serialize};

/// A named measurement location, as listed by `/measurements/sites/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
}

impl Site {
    /// Decode the JSON array returned by the sites endpoint.
    pub fn list_from_json(body: &str) -> crate::Result<Vec<Site>> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::Site;

    #[test]
    fn test_list_from_json() {
        let sites = Site::list_from_json(r#"[{"name":"Polarstern_23"},{"name":"Tara_Ocean"}]"#).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[1].name, "Tara_Ocean");
    }

    #[test]
    fn test_list_from_json_rejects_garbage() {
        assert!(Site::list_from_json("<html>oops</html>").is_err());
    }
}
