use super::Satellite;

/// Satellites marked for inclusion in a request
///
/// Members are unique by [`Satellite::identity`] and keep the order in
/// which they were selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    satellites: Vec<Satellite>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, satellite: &Satellite) -> bool {
        self.satellites
            .iter()
            .any(|s| s.identity() == satellite.identity())
    }

    /// Removes the satellite if selected, adds it otherwise
    ///
    /// Returns `true` when the satellite ends up selected.
    pub fn toggle(&mut self, satellite: &Satellite) -> bool {
        if self.contains(satellite) {
            self.satellites
                .retain(|s| s.identity() != satellite.identity());
            false
        } else {
            self.satellites.push(satellite.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.satellites.clear();
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    pub fn as_slice(&self) -> &[Satellite] {
        &self.satellites
    }
}
