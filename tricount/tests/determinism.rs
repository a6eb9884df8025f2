mod common;

use tricount::{Engine, EngineConfig, Reduction};

use common::{random_graph, rng};

#[test]
fn count_is_independent_of_threads_and_reduction() {
    let mut rng = rng(11);
    let edges = tricount::EdgeList::from_pairs(random_graph(&mut rng, 400, 0.05));

    let mut seen = Vec::new();
    for &threads in &[1, 2, 4] {
        for &reduction in &[Reduction::Atomic, Reduction::Buffer] {
            let engine = Engine::new(EngineConfig {
                threads: Some(threads),
                reduction,
                ..EngineConfig::default()
            })
            .unwrap();
            let (graph, _) = engine.build(&edges).unwrap();
            for _ in 0..3 {
                seen.push(engine.count(&graph).unwrap().raw);
            }
        }
    }
    assert!(seen.windows(2).all(|w| w[0] == w[1]), "{:?}", seen);
    assert!(seen[0] > 0);
}

#[test]
fn star_graph_has_no_triangles() {
    for config in common::all_configs() {
        let edges = tricount::EdgeList::from_pairs(common::star(500));
        let census = tricount::count_triangles(&edges, config).unwrap();
        assert_eq!(census.triangles, 0);
        assert_eq!(census.items, 500);
    }
}
