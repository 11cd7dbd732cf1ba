// crates/spotfinder-core/src/traits.rs
use crate::geo::Coordinate;

/// Read-only view of a catalog record as the search engine sees it.
///
/// The engine never owns or mutates records; it only needs these string and
/// coordinate views. [`crate::CatalogEntry`] is the bundled implementation,
/// but any storage row type can be searched by implementing this trait.
///
/// # Examples
/// ```rust
/// use spotfinder_core::{Coordinate, Searchable};
///
/// struct Row { title: String, lat: f64, lng: f64 }
///
/// impl Searchable for Row {
///     fn name_str(&self) -> &str { &self.title }
///     fn description_str(&self) -> Option<&str> { None }
///     fn tags_str(&self) -> &str { "" }
///     fn coordinate(&self) -> Coordinate { Coordinate::new(self.lat, self.lng) }
/// }
///
/// let row = Row { title: "Kaike Onsen".into(), lat: 35.45, lng: 133.37 };
/// assert_eq!(row.coordinate().lat, 35.45);
/// ```
pub trait Searchable {
    /// Display name, always matched by the text stage.
    fn name_str(&self) -> &str;

    /// Optional free-form description, also matched by the text stage.
    fn description_str(&self) -> Option<&str>;

    /// Unsegmented comma-separated tag string (e.g. `"露天風呂,家族風呂"`).
    fn tags_str(&self) -> &str;

    /// Position in decimal degrees.
    fn coordinate(&self) -> Coordinate;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name_str(&self) -> &str {
        (**self).name_str()
    }

    fn description_str(&self) -> Option<&str> {
        (**self).description_str()
    }

    fn tags_str(&self) -> &str {
        (**self).tags_str()
    }

    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}
