//! Parallel evaluation of many route queries over one router

use rayon::prelude::*;

use super::transport_router::{RouteResult, TransportRouter};
use crate::Minutes;

impl TransportRouter {
    /// Fastest routes from `from` to each of `targets`, in the order of `targets`
    pub fn build_routes_one_to_many<S>(&self, from: &str, targets: &[S]) -> Vec<Option<RouteResult>>
    where
        S: AsRef<str> + Sync,
    {
        targets
            .par_iter()
            .map(|target| self.build_route(from, target.as_ref()))
            .collect()
    }

    /// Total travel times between every ordered pair of `stops`.
    ///
    /// Row `i` holds the times from `stops[i]`; unreachable pairs are `None`.
    pub fn travel_time_matrix<S>(&self, stops: &[S]) -> Vec<Vec<Option<Minutes>>>
    where
        S: AsRef<str> + Sync,
    {
        stops
            .par_iter()
            .map(|from| {
                self.build_routes_one_to_many(from.as_ref(), stops)
                    .into_iter()
                    .map(|route| route.map(|route| route.total_time))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{RoutingSettings, TransitCatalogue, TransportRouter};

    fn router() -> TransportRouter {
        let mut catalogue = TransitCatalogue::new();
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            catalogue.add_stop(*name, 0.0, f64::from(u8::try_from(i).unwrap())).unwrap();
        }
        catalogue.add_distance("A", "B", 1000).unwrap();
        catalogue.add_distance("B", "C", 2000).unwrap();
        catalogue.add_bus("1", &["A", "B", "C"], false).unwrap();
        TransportRouter::new(Arc::new(catalogue), RoutingSettings::new(2.0, 30.0).unwrap()).unwrap()
    }

    #[test]
    fn one_to_many_matches_single_queries() {
        let router = router();
        let targets = ["A", "B", "C", "D", "Z"];
        let batch = router.build_routes_one_to_many("B", &targets);

        assert_eq!(batch.len(), targets.len());
        for (target, route) in targets.iter().zip(&batch) {
            assert_eq!(route, &router.build_route("B", target));
        }
        assert!(batch[3].is_none());
        assert!(batch[4].is_none());
    }

    #[test]
    fn matrix_is_square_and_symmetric_for_linear_bus() {
        let router = router();
        let stops = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let matrix = router.travel_time_matrix(&stops);

        assert_eq!(matrix.len(), 3);
        for (i, row) in matrix.iter().enumerate() {
            assert_eq!(row.len(), 3);
            assert_eq!(row[i], Some(2.0));
            for (j, time) in row.iter().enumerate() {
                let back = matrix[j][i].unwrap();
                assert!((time.unwrap() - back).abs() < 1e-9);
            }
        }
        // wait 2 + 3000 m at 30 km/h
        assert!((matrix[0][2].unwrap() - 8.0).abs() < 1e-9);
    }
}
