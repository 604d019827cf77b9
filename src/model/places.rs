//! Named destinations resolved from the places dataset

use geo::Point;

/// Named point location on campus
#[derive(Debug, Clone)]
pub struct Place {
    pub name: String,
    pub geometry: Point<f64>,
}

/// Registry of named destinations.
#[derive(Debug, Clone, Default)]
pub struct Places {
    places: Vec<Place>,
}

impl Places {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    /// Exact name lookup, ignoring ASCII case.
    pub fn resolve(&self, name: &str) -> Option<&Place> {
        self.places
            .iter()
            .find(|place| place.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive substring search, in dataset order.
    ///
    /// Backs the search box; ranking and display stay in the UI layer.
    pub fn search(&self, query: &str) -> Vec<&Place> {
        let query = query.to_lowercase();
        self.places
            .iter()
            .filter(|place| place.name.to_lowercase().contains(&query))
            .collect()
    }
}
