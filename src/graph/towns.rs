use super::{AdjacencyTable, WeightedGraph};


/// Road distances in km between towns of the Madrid region
/// Some roads are listed from one end only, the graph is undirected either way
pub const TOWN_DISTANCES: &AdjacencyTable<'static, u32> = &[
    ("Madrid", &[("Alcorcón", 13), ("Villaviciosa de Odón", 22), ("Alcalá de Henares", 35)]),
    ("Villanueva de la Cañada", &[("Villaviciosa de Odón", 11), ("Boadilla del Monte", 7)]),
    ("Alcorcón", &[("Madrid", 13), ("Móstoles", 5)]),
    ("Móstoles", &[("Alcorcón", 5), ("Fuenlabrada", 8)]),
    ("Fuenlabrada", &[("Móstoles", 8), ("Getafe", 10)]),
    ("Getafe", &[("Fuenlabrada", 10), ("Madrid", 16)]),
    ("Villaviciosa de Odón", &[("Madrid", 22), ("Villanueva de la Cañada", 11)]),
    ("Boadilla del Monte", &[("Villanueva de la Cañada", 7), ("Madrid", 15)]),
    ("Alcalá de Henares", &[("Madrid", 35), ("Torrejón de Ardoz", 15)]),
    ("Torrejón de Ardoz", &[("Alcalá de Henares", 15), ("Madrid", 20)]),
];

/// Graph of the town table
pub fn towns() -> WeightedGraph<u32> {
    WeightedGraph::from_table(TOWN_DISTANCES)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_town_graph_shape() {
        let graph = towns();

        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 12);
        assert_eq!(graph.degree("Madrid"), 6);
        assert_eq!(graph.weight("Getafe", "Madrid"), Some(16));
        assert_eq!(graph.weight("Madrid", "Torrejón de Ardoz"), Some(20));
    }

    #[test]
    fn test_town_order_follows_table() {
        let graph = towns();
        let nodes: Vec<_> = graph.nodes().collect();

        assert_eq!(nodes, vec![
            "Madrid",
            "Alcorcón",
            "Villaviciosa de Odón",
            "Alcalá de Henares",
            "Villanueva de la Cañada",
            "Boadilla del Monte",
            "Móstoles",
            "Fuenlabrada",
            "Getafe",
            "Torrejón de Ardoz",
        ]);
    }

    #[test]
    fn test_table_weights_are_symmetric() {
        // every road listed from both ends agrees on its distance
        for (town, roads) in TOWN_DISTANCES {
            for (other, km) in roads.iter() {
                let back = TOWN_DISTANCES
                    .iter()
                    .find(|(name, _)| name == other)
                    .and_then(|(_, r)| r.iter().find(|(n, _)| n == town));
                if let Some((_, back_km)) = back {
                    assert_eq!(km, back_km, "{town} <-> {other}");
                }
            }
        }
    }
}
