//! Static carousel items.

/// A card on the wheel. Read-only once the wheel is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselItem {
    /// Image location. Carried as data; the wheel never fetches it.
    pub image: String,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
}

impl CarouselItem {
    pub fn new(image: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

const UNSPLASH_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{UNSPLASH_PARAMS}")
}

/// The four landscape cards shipped with the wheel.
pub fn default_catalog() -> Vec<CarouselItem> {
    vec![
        CarouselItem::new(unsplash("photo-1501854140801-50d01698950b"), "SENDERO SECRETO")
            .with_description("Un camino escondido entre colinas verdes"),
        CarouselItem::new(unsplash("photo-1470071459604-3b5ec3a7fe05"), "BOSQUE ENCANTADO")
            .with_description("Niebla matinal sobre el bosque"),
        CarouselItem::new(unsplash("photo-1469474968028-56623f02e42e"), "AMANECER MÁGICO")
            .with_description("Los primeros rayos del sol en el valle"),
        CarouselItem::new(unsplash("photo-1441974231531-c6227db76b6e"), "CASCADA NATURAL")
            .with_description("Luz entre los árboles junto al agua"),
    ]
}
