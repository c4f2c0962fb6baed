//! Display types for UI components
//!
//! These types are lightweight versions of The Cat API records, containing
//! only the fields needed for display. Pages map wire types into them so
//! views never depend on the HTTP layer.

/// Alt text used when an image has no breed name to describe it
pub const DEFAULT_ALT_TEXT: &str = "Cat";

/// A single cat image and the breeds attached to it
#[derive(Clone, Debug, PartialEq)]
pub struct CatImage {
    pub id: String,
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Breeds attached to the image. Only the first is shown.
    pub breeds: Vec<Breed>,
}

impl CatImage {
    /// The breed the detail page describes
    pub fn primary_breed(&self) -> Option<&Breed> {
        self.breeds.first()
    }

    /// Alt text for the image: the primary breed's name, or "Cat"
    pub fn alt_text(&self) -> &str {
        self.primary_breed()
            .and_then(|b| b.name.as_deref())
            .unwrap_or(DEFAULT_ALT_TEXT)
    }
}

/// Breed metadata attached to an image
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Breed {
    pub id: String,
    pub name: Option<String>,
    pub origin: Option<String>,
    pub temperament: Option<String>,
    pub description: Option<String>,
}

impl Breed {
    /// Labelled lines for the details panel, blank when a field is missing
    pub fn detail_lines(&self) -> [DetailLine; 4] {
        [
            DetailLine::new("Name", &self.name),
            DetailLine::new("Origin", &self.origin),
            DetailLine::new("Temperament", &self.temperament),
            DetailLine::new("Description", &self.description),
        ]
    }
}

/// One "Label: value" row in the details panel
#[derive(Clone, Debug, PartialEq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

impl DetailLine {
    fn new(label: &'static str, value: &Option<String>) -> Self {
        Self {
            label,
            value: value.clone().unwrap_or_default(),
        }
    }

    /// Rendered text, e.g. `Name: Bengal`
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// Breed entry for the home page selector
#[derive(Clone, Debug, PartialEq)]
pub struct BreedSummary {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bengal() -> Breed {
        Breed {
            id: "beng".into(),
            name: Some("Bengal".into()),
            origin: Some("United States".into()),
            temperament: Some("Alert, Agile".into()),
            description: Some("Wild-looking breed.".into()),
        }
    }

    #[test]
    fn test_detail_lines() {
        let texts: Vec<String> = bengal().detail_lines().iter().map(|l| l.text()).collect();
        assert_eq!(
            texts,
            vec![
                "Name: Bengal",
                "Origin: United States",
                "Temperament: Alert, Agile",
                "Description: Wild-looking breed.",
            ]
        );
    }

    #[test]
    fn test_detail_lines_blank_when_missing() {
        let breed = Breed {
            id: "x".into(),
            ..Default::default()
        };
        let texts: Vec<String> = breed.detail_lines().iter().map(|l| l.text()).collect();
        assert_eq!(
            texts,
            vec!["Name: ", "Origin: ", "Temperament: ", "Description: "]
        );
    }

    #[test]
    fn test_alt_text_falls_back_to_cat() {
        let mut image = CatImage {
            id: "abc".into(),
            url: "http://img/1.jpg".into(),
            width: None,
            height: None,
            breeds: vec![],
        };
        assert_eq!(image.alt_text(), "Cat");

        image.breeds.push(Breed {
            id: "beng".into(),
            ..Default::default()
        });
        assert_eq!(image.alt_text(), "Cat");

        image.breeds[0] = bengal();
        assert_eq!(image.alt_text(), "Bengal");
    }
}
