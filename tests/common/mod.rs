use wayfinder::loading::osm::{RawElement, RawNode, RawWay};
use wayfinder::{OsmNodeId, OsmWayId};

pub fn node(id: OsmNodeId, lat: f64, lon: f64) -> RawElement {
    RawElement::Node(RawNode {
        id,
        lat,
        lon,
        tags: Default::default(),
    })
}

pub fn way(id: OsmWayId, nodes: &[OsmNodeId]) -> RawElement {
    RawElement::Way(RawWay {
        id,
        nodes: nodes.to_vec(),
        tags: Default::default(),
    })
}

/// One through-way `[1, 2, 3, 4]` whose node 2 is shared with a spur way
/// `[2, 9]`, making it the only interior junction.
pub fn crossroads() -> Vec<RawElement> {
    vec![
        node(1, 0.0, 0.0),
        node(2, 0.0, 1.0),
        node(3, 0.0, 2.0),
        node(4, 0.0, 3.0),
        node(9, 1.0, 1.0),
        way(100, &[1, 2, 3, 4]),
        way(101, &[2, 9]),
    ]
}

/// Two roads with no junction in common.
pub fn disconnected() -> Vec<RawElement> {
    vec![
        node(1, 0.0, 0.0),
        node(2, 0.0, 1.0),
        node(10, 5.0, 5.0),
        node(11, 5.0, 6.0),
        way(100, &[1, 2]),
        way(101, &[10, 11]),
    ]
}
