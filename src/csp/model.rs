use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    csp::assignment::Assignment,
    error::{ModelError, Result},
};

/// Index of a region in declaration order.
pub type RegionId = usize;
/// Index of a colour in palette order.
pub type ColourId = usize;

/// A map-colouring problem: regions, a colour palette, per-region domains
/// and a symmetric adjacency relation.
///
/// Construction validates the input eagerly — duplicate names, borders that
/// reference unknown regions and self-borders are rejected — so the solver
/// can index freely afterwards. The adjacency relation is stored
/// symmetrized regardless of how the borders were given.
#[derive(Debug, Clone, Serialize)]
pub struct ColouringModel {
    regions: Vec<String>,
    colours: Vec<String>,
    adjacency: Vec<Vec<RegionId>>,
    domains: Vec<Vec<ColourId>>,
}

impl ColouringModel {
    pub fn new(
        regions: Vec<String>,
        colours: Vec<String>,
        borders: Vec<(String, String)>,
    ) -> Result<Self> {
        let mut region_ids: HashMap<&str, RegionId> = HashMap::new();
        for (id, name) in regions.iter().enumerate() {
            if region_ids.insert(name.as_str(), id).is_some() {
                return Err(ModelError::DuplicateRegion(name.clone()).into());
            }
        }

        let mut seen_colours: HashMap<&str, ColourId> = HashMap::new();
        for (id, name) in colours.iter().enumerate() {
            if seen_colours.insert(name.as_str(), id).is_some() {
                return Err(ModelError::DuplicateColour(name.clone()).into());
            }
        }

        let mut adjacency: Vec<Vec<RegionId>> = vec![Vec::new(); regions.len()];
        for (a, b) in &borders {
            let &a_id = region_ids
                .get(a.as_str())
                .ok_or_else(|| ModelError::UnknownRegion(a.clone()))?;
            let &b_id = region_ids
                .get(b.as_str())
                .ok_or_else(|| ModelError::UnknownRegion(b.clone()))?;
            if a_id == b_id {
                return Err(ModelError::SelfBorder(a.clone()).into());
            }
            if !adjacency[a_id].contains(&b_id) {
                adjacency[a_id].push(b_id);
                adjacency[b_id].push(a_id);
            }
        }

        // Every region starts with the full palette, in palette order.
        let full_palette: Vec<ColourId> = (0..colours.len()).collect();
        let domains = vec![full_palette; regions.len()];

        Ok(Self {
            regions,
            colours,
            adjacency,
            domains,
        })
    }

    /// Replaces one region's domain with the named colours, in the given
    /// order. An empty list is allowed and makes the model unsolvable.
    pub fn restrict_domain(&mut self, region: &str, allowed: &[String]) -> Result<()> {
        let region = self
            .region_id(region)
            .ok_or_else(|| ModelError::UnknownRegion(region.to_string()))?;

        let mut domain = Vec::with_capacity(allowed.len());
        for name in allowed {
            let colour = self
                .colours
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| ModelError::UnknownColour(name.clone()))?;
            domain.push(colour);
        }
        self.domains[region] = domain;
        Ok(())
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn colours(&self) -> &[String] {
        &self.colours
    }

    pub fn region_id(&self, name: &str) -> Option<RegionId> {
        self.regions.iter().position(|r| r == name)
    }

    pub fn neighbours(&self, region: RegionId) -> &[RegionId] {
        &self.adjacency[region]
    }

    /// The candidate colours for `region`, in the order the solver tries
    /// them.
    pub fn domain(&self, region: RegionId) -> &[ColourId] {
        &self.domains[region]
    }

    /// Whether binding `region` to `colour` conflicts with any currently
    /// bound neighbour. Unbound neighbours never conflict. Pure with respect
    /// to the assignment snapshot.
    pub fn is_consistent(
        &self,
        assignment: &Assignment,
        region: RegionId,
        colour: ColourId,
    ) -> bool {
        self.adjacency[region]
            .iter()
            .all(|&neighbour| assignment.get(neighbour) != Some(colour))
    }

    /// Whether a complete assignment satisfies every adjacency constraint.
    pub fn is_solution(&self, assignment: &Assignment) -> bool {
        assignment.is_complete()
            && (0..self.region_count()).all(|region| match assignment.get(region) {
                Some(colour) => self.adjacency[region]
                    .iter()
                    .all(|&neighbour| assignment.get(neighbour) != Some(colour)),
                None => false,
            })
    }
}

/// Serde-friendly raw form of a model, as loaded from user-supplied JSON.
/// [`MapDefinition::build`] performs the validation that direct
/// deserialization of [`ColouringModel`] would bypass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDefinition {
    pub regions: Vec<String>,
    pub colours: Vec<String>,
    pub borders: Vec<(String, String)>,
}

impl MapDefinition {
    pub fn build(self) -> Result<ColouringModel> {
        ColouringModel::new(self.regions, self.colours, self.borders)
    }
}

#[cfg(test)]
mod tests {
    use super::{ColouringModel, MapDefinition};
    use crate::csp::assignment::Assignment;
    use crate::error::ModelError;
    use crate::problems::australia::australia;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rejects_duplicate_regions() {
        let err = ColouringModel::new(names(&["A", "A"]), names(&["Red"]), vec![]).unwrap_err();
        assert!(matches!(
            err.as_model_error(),
            Some(ModelError::DuplicateRegion(r)) if r == "A"
        ));
    }

    #[test]
    fn rejects_duplicate_colours() {
        let err =
            ColouringModel::new(names(&["A"]), names(&["Red", "Red"]), vec![]).unwrap_err();
        assert!(matches!(
            err.as_model_error(),
            Some(ModelError::DuplicateColour(c)) if c == "Red"
        ));
    }

    #[test]
    fn rejects_borders_to_unknown_regions() {
        let err = ColouringModel::new(
            names(&["A", "B"]),
            names(&["Red"]),
            vec![("A".to_string(), "C".to_string())],
        )
        .unwrap_err();
        assert!(matches!(
            err.as_model_error(),
            Some(ModelError::UnknownRegion(r)) if r == "C"
        ));
    }

    #[test]
    fn rejects_self_borders() {
        let err = ColouringModel::new(
            names(&["A"]),
            names(&["Red"]),
            vec![("A".to_string(), "A".to_string())],
        )
        .unwrap_err();
        assert!(matches!(
            err.as_model_error(),
            Some(ModelError::SelfBorder(_))
        ));
    }

    #[test]
    fn adjacency_is_symmetrized_and_deduplicated() {
        let model = ColouringModel::new(
            names(&["A", "B"]),
            names(&["Red"]),
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "A".to_string()),
            ],
        )
        .unwrap();

        assert_eq!(model.neighbours(0), &[1]);
        assert_eq!(model.neighbours(1), &[0]);
    }

    #[test]
    fn consistency_ignores_unbound_neighbours() {
        let model = australia();
        let assignment = Assignment::unassigned(model.region_count());
        let sa = model.region_id("SA").unwrap();
        assert!(model.is_consistent(&assignment, sa, 0));
    }

    #[test]
    fn consistency_rejects_a_matching_bound_neighbour() {
        let model = australia();
        let mut assignment = Assignment::unassigned(model.region_count());
        let wa = model.region_id("WA").unwrap();
        let nt = model.region_id("NT").unwrap();

        assignment.bind(wa, 1);
        assert!(!model.is_consistent(&assignment, nt, 1));
        assert!(model.is_consistent(&assignment, nt, 0));
    }

    #[test]
    fn consistency_checks_never_mutate_the_assignment() {
        let model = australia();
        let mut assignment = Assignment::unassigned(model.region_count());
        assignment.bind(0, 2);
        let snapshot = assignment.clone();

        let nt = model.region_id("NT").unwrap();
        let first = model.is_consistent(&assignment, nt, 2);
        let second = model.is_consistent(&assignment, nt, 2);

        assert_eq!(first, second);
        assert_eq!(assignment, snapshot);
    }

    #[test]
    fn domain_restriction_replaces_the_palette() {
        let mut model = australia();
        model
            .restrict_domain("T", &names(&["Blue"]))
            .unwrap();
        let t = model.region_id("T").unwrap();
        assert_eq!(model.domain(t), &[2]);

        let err = model.restrict_domain("T", &names(&["Mauve"])).unwrap_err();
        assert!(matches!(
            err.as_model_error(),
            Some(ModelError::UnknownColour(c)) if c == "Mauve"
        ));
    }

    #[test]
    fn map_definition_round_trips_through_json() {
        let json = r#"{
            "regions": ["A", "B"],
            "colours": ["Red", "Green"],
            "borders": [["A", "B"]]
        }"#;
        let definition: MapDefinition = serde_json::from_str(json).unwrap();
        let model = definition.build().unwrap();
        assert_eq!(model.region_count(), 2);
        assert_eq!(model.neighbours(0), &[1]);
    }
}
