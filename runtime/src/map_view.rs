use crate::{MapCollaborator, MapError};
use onboard_common::{
    Coordinate, Location, MapConfig, MapScope, PinColor, ALL_BRANCHES_ADDRESS,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub pin: PinColor,
    pub at: Coordinate,
    /// Popup text: the label over the branch address.
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Viewport {
    Center {
        at: Coordinate,
        zoom: u8,
    },
    Fit {
        south_west: Coordinate,
        north_east: Coordinate,
        padding: u32,
    },
}

/// Marker and viewport state for the branch map, computed without any
/// tile or widget backend.
#[derive(Debug, Clone)]
pub struct MapView {
    locations: Vec<Location>,
    config: MapConfig,
    initialized: bool,
    scope: MapScope,
    address: String,
    markers: Vec<Marker>,
    viewport: Option<Viewport>,
}

impl MapView {
    pub fn new(locations: Vec<Location>, config: MapConfig) -> Self {
        Self {
            locations,
            config,
            initialized: false,
            scope: MapScope::All,
            address: String::new(),
            markers: Vec::new(),
            viewport: None,
        }
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    pub fn scope(&self) -> MapScope {
        self.scope
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn tile_url(&self) -> &str {
        &self.config.tile_url
    }

    fn show(&mut self, scope: MapScope) {
        self.scope = scope;
        self.markers = self
            .locations
            .iter()
            .filter(|location| scope.includes(location.branch))
            .map(|location| Marker {
                label: location.label.clone(),
                pin: location.pin,
                at: location.coordinate,
                popup: format!("{}\n{}", location.label, location.address),
            })
            .collect();

        match scope {
            MapScope::All => {
                self.address = ALL_BRANCHES_ADDRESS.to_string();
                self.viewport = bounds(&self.markers).map(|(south_west, north_east)| {
                    Viewport::Fit {
                        south_west,
                        north_east,
                        padding: self.config.fit_padding,
                    }
                });
            }
            MapScope::Branch(_) => {
                self.address = self
                    .locations
                    .iter()
                    .find(|location| scope.includes(location.branch))
                    .map(|location| location.address.clone())
                    .unwrap_or_default();
                self.viewport = self.markers.first().map(|marker| Viewport::Center {
                    at: marker.at,
                    zoom: self.config.branch_zoom.min(self.config.max_zoom),
                });
            }
        }

        debug!(
            scope = %scope,
            markers = self.markers.len(),
            "map view updated"
        );
    }
}

fn bounds(markers: &[Marker]) -> Option<(Coordinate, Coordinate)> {
    let first = markers.first()?.at;
    Some(markers.iter().skip(1).fold((first, first), |(sw, ne), marker| {
        (
            Coordinate::new(sw.lat.min(marker.at.lat), sw.lng.min(marker.at.lng)),
            Coordinate::new(ne.lat.max(marker.at.lat), ne.lng.max(marker.at.lng)),
        )
    }))
}

impl MapCollaborator for MapView {
    fn initialize(&mut self, scope: MapScope) -> Result<(), MapError> {
        self.initialized = true;
        self.markers.clear();
        self.show(scope);
        Ok(())
    }

    fn update(&mut self, scope: MapScope) -> Result<(), MapError> {
        if !self.initialized {
            return Err(MapError::NotInitialized);
        }
        self.show(scope);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use onboard_common::{Branch, Catalog};

    fn map() -> MapView {
        let catalog = Catalog::builtin().unwrap();
        MapView::new(catalog.locations().to_vec(), MapConfig::default())
    }

    #[test]
    fn update_before_initialize_fails() {
        let mut map = map();
        assert_eq!(
            map.update(MapScope::Branch(Branch::Egypt)),
            Err(MapError::NotInitialized)
        );
        assert!(map.markers().is_empty());
    }

    #[test]
    fn all_scope_fits_both_branches() {
        let mut map = map();
        map.initialize(MapScope::All).unwrap();

        assert_eq!(map.address(), ALL_BRANCHES_ADDRESS);
        assert_eq!(map.markers().len(), 2);
        assert_eq!(map.markers()[0].pin, PinColor::Red);
        assert_eq!(map.markers()[1].pin, PinColor::Blue);
        assert_eq!(
            map.viewport(),
            Some(&Viewport::Fit {
                south_west: Coordinate::new(26.333348927579664, 31.2357),
                north_east: Coordinate::new(30.0444, 50.18430572906374),
                padding: 20,
            })
        );
    }

    #[test]
    fn egypt_tab_recenters_on_a_single_marker() {
        let mut map = map();
        map.initialize(MapScope::All).unwrap();
        map.update(MapScope::Branch(Branch::Egypt)).unwrap();

        assert_eq!(map.scope(), MapScope::Branch(Branch::Egypt));
        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.markers()[0].label, "Egypt Branch");
        assert_eq!(
            map.viewport(),
            Some(&Viewport::Center {
                at: Coordinate::new(30.0444, 31.2357),
                zoom: 17,
            })
        );
        assert!(map.address().ends_with("Cairo Governorate 4470311, Egypt"));
    }

    #[test]
    fn reinitialize_drops_previous_markers() {
        let mut map = map();
        map.initialize(MapScope::Branch(Branch::Sa)).unwrap();
        map.initialize(MapScope::All).unwrap();
        assert_eq!(map.markers().len(), 2);
    }
}
