use dense_sssp::graph::CostMatrix;
use dense_sssp::{AtriaCentrality, AtriaPlugin, Error};

// 0 - 1 - 2 linked positively, 3 - 4 linked negatively
fn two_components() -> CostMatrix<f64> {
    CostMatrix::from_rows(vec![
        vec![0.0, 0.5, 0.0, 0.0, 0.0],
        vec![0.5, 0.0, 0.5, 0.0, 0.0],
        vec![0.0, 0.5, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, -0.5],
        vec![0.0, 0.0, 0.0, -0.5, 0.0],
    ])
    .unwrap()
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_centrality_of_two_components() {
    let atria = AtriaCentrality::new(&two_components());

    assert_eq!(atria.vertex_count(), 5);
    // The hub of the chain goes first, its neighbours lose every triad with it
    assert_eq!(atria.centrality(), vec![0.0, 1.0, 0.0, -0.5, 0.0]);
}

#[test]
fn test_ranking_orders_by_magnitude() {
    let atria = AtriaCentrality::new(&two_components());
    let ranking = atria.ranking(&labels(&["a", "b", "c", "d", "e"])).unwrap();

    let order: Vec<(&str, f64, usize)> = ranking
        .iter()
        .map(|v| (v.label.as_str(), v.centrality, v.rank))
        .collect();
    assert_eq!(
        order,
        vec![
            ("b", 1.0, 5),
            ("d", -0.5, 4),
            ("a", 0.0, 3),
            ("c", 0.0, 2),
            ("e", 0.0, 1),
        ]
    );
    assert_eq!(ranking[1].vertex, 3);
}

#[test]
fn test_isolated_vertices_have_no_centrality() {
    let atria = AtriaCentrality::new(&CostMatrix::<f64>::from_rows(vec![vec![0.0; 3]; 3]).unwrap());
    assert_eq!(atria.centrality(), vec![0.0; 3]);

    let empty = AtriaCentrality::new(&CostMatrix::<f64>::from_rows(Vec::new()).unwrap());
    assert!(empty.centrality().is_empty());
    assert!(empty.ranking(&[]).unwrap().is_empty());
}

#[test]
fn test_ranking_rejects_wrong_label_count() {
    let atria = AtriaCentrality::new(&two_components());

    assert!(matches!(
        atria.ranking(&labels(&["a", "b"])),
        Err(Error::LabelCount { expected: 5, found: 2 })
    ));
}

#[test]
fn test_plugin_writes_noa_table() {
    let mut plugin = AtriaPlugin::new();
    plugin.load(two_components()).unwrap();

    let ranking = plugin.run().unwrap();
    let mut out = Vec::new();
    plugin.emit(&ranking, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Name\tCentrality\tRank\n1\t1\t\t5\n3\t0.5\t\t4\n0\t0\t\t3\n2\t0\t\t2\n4\t0\t\t1\n"
    );
}

#[test]
fn test_plugin_labels_and_errors() {
    let mut plugin: AtriaPlugin<f64> = AtriaPlugin::new();
    assert!(matches!(plugin.run(), Err(Error::NotLoaded)));

    assert!(matches!(
        plugin.load_labelled(two_components(), labels(&["only"])),
        Err(Error::LabelCount { expected: 5, found: 1 })
    ));
    assert!(matches!(plugin.run(), Err(Error::NotLoaded)));

    plugin
        .load_labelled(two_components(), labels(&["a", "b", "c", "d", "e"]))
        .unwrap();
    let ranking = plugin.run().unwrap();
    assert_eq!(ranking[0].label, "b");
}
