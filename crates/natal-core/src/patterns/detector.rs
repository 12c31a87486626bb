//! Higher-order chart patterns built from the pairwise aspect set.
//!
//! All enumeration walks bodies in canonical order with `i < j < k`
//! nesting, so a body triple (or quad) is visited exactly once and the
//! output is reproducible across runs.

use crate::aspects::{Aspect, AspectKind};
use crate::patterns::types::{
    ChartPatterns, GrandCross, GrandTrine, Kite, Stellium, TSquare, Yod,
};
use crate::positions::{Body, ChartPoint, PositionSet, ALL_BODIES};
use crate::zodiac::{Sign, ALL_SIGNS};

const BODY_COUNT: usize = ALL_BODIES.len();

/// Adjacency matrix of matched body-to-body aspects.
struct AspectGraph {
    edges: [[Option<AspectKind>; BODY_COUNT]; BODY_COUNT],
    bodies: Vec<Body>,
}

impl AspectGraph {
    fn build(aspects: &[Aspect], positions: &PositionSet) -> Self {
        let mut edges = [[None; BODY_COUNT]; BODY_COUNT];
        for aspect in aspects {
            if let (ChartPoint::Body(a), ChartPoint::Body(b)) = (aspect.first, aspect.second) {
                edges[a.index()][b.index()] = Some(aspect.kind);
                edges[b.index()][a.index()] = Some(aspect.kind);
            }
        }
        Self {
            edges,
            bodies: positions.bodies().collect(),
        }
    }

    fn has(&self, a: Body, b: Body, kind: AspectKind) -> bool {
        self.edges[a.index()][b.index()] == Some(kind)
    }

    /// Bodies with at least one aspect of `kind`, canonical order.
    fn participants(&self, kind: AspectKind) -> Vec<Body> {
        self.bodies
            .iter()
            .copied()
            .filter(|&a| self.bodies.iter().any(|&b| self.has(a, b, kind)))
            .collect()
    }

    /// Unordered pairs joined by `kind`, each as `[lower, higher]`.
    fn pairs(&self, kind: AspectKind) -> Vec<[Body; 2]> {
        let members = self.participants(kind);
        let mut pairs = Vec::new();
        for (i, &a) in members.iter().enumerate() {
            for &b in &members[i + 1..] {
                if self.has(a, b, kind) {
                    pairs.push([a, b]);
                }
            }
        }
        pairs
    }
}

/// Pattern detector
pub struct PatternDetector {
    stellium_min: usize,
}

impl PatternDetector {
    pub fn new(stellium_min: usize) -> Self {
        Self {
            stellium_min: stellium_min.max(2),
        }
    }

    /// Detect every pattern from the body aspect list and raw positions.
    /// Aspects involving chart angles are ignored.
    pub fn detect(&self, aspects: &[Aspect], positions: &PositionSet) -> ChartPatterns {
        let graph = AspectGraph::build(aspects, positions);
        let grand_trines = find_grand_trines(&graph, positions);
        let kites = find_kites(&graph, &grand_trines);

        let patterns = ChartPatterns {
            stelliums: self.find_stelliums(positions),
            t_squares: find_t_squares(&graph, positions),
            yods: find_yods(&graph),
            grand_crosses: find_grand_crosses(&graph, positions),
            grand_trines,
            kites,
        };
        log::debug!("detected {} chart patterns", patterns.total());
        patterns
    }

    fn find_stelliums(&self, positions: &PositionSet) -> Vec<Stellium> {
        ALL_SIGNS
            .iter()
            .filter_map(|&sign| {
                let members: Vec<Body> = positions
                    .iter()
                    .filter(|p| Sign::from_longitude(p.longitude) == sign)
                    .map(|p| p.body)
                    .collect();
                (members.len() >= self.stellium_min).then_some(Stellium { sign, members })
            })
            .collect()
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new(3)
    }
}

fn sign_of(positions: &PositionSet, body: Body) -> Option<Sign> {
    positions.longitude(body).map(Sign::from_longitude)
}

/// Value shared by every item, or None if they differ.
fn shared<T: PartialEq + Copy>(mut values: impl Iterator<Item = Option<T>>) -> Option<T> {
    let first = values.next()??;
    for value in values {
        if value? != first {
            return None;
        }
    }
    Some(first)
}

fn find_grand_trines(graph: &AspectGraph, positions: &PositionSet) -> Vec<GrandTrine> {
    let trine = AspectKind::Trine;
    let members = graph.participants(trine);
    let mut found = Vec::new();
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            if !graph.has(members[i], members[j], trine) {
                continue;
            }
            for k in (j + 1)..members.len() {
                let (a, b, c) = (members[i], members[j], members[k]);
                if graph.has(a, c, trine) && graph.has(b, c, trine) {
                    let element = shared(
                        [a, b, c]
                            .iter()
                            .map(|&body| sign_of(positions, body).map(|s| s.element())),
                    );
                    found.push(GrandTrine {
                        members: [a, b, c],
                        element,
                    });
                }
            }
        }
    }
    found
}

fn find_t_squares(graph: &AspectGraph, positions: &PositionSet) -> Vec<TSquare> {
    let squares = graph.participants(AspectKind::Square);
    let mut found = Vec::new();
    for [a, b] in graph.pairs(AspectKind::Opposition) {
        for &apex in &squares {
            if apex == a || apex == b {
                continue;
            }
            if graph.has(a, apex, AspectKind::Square) && graph.has(b, apex, AspectKind::Square) {
                let modality = shared(
                    [a, b, apex]
                        .iter()
                        .map(|&body| sign_of(positions, body).map(|s| s.modality())),
                );
                found.push(TSquare {
                    opposition: [a, b],
                    apex,
                    modality,
                });
            }
        }
    }
    found
}

fn find_yods(graph: &AspectGraph) -> Vec<Yod> {
    let quincunxes = graph.participants(AspectKind::Quincunx);
    let mut found = Vec::new();
    for [a, b] in graph.pairs(AspectKind::Sextile) {
        for &apex in &quincunxes {
            if apex == a || apex == b {
                continue;
            }
            if graph.has(a, apex, AspectKind::Quincunx) && graph.has(b, apex, AspectKind::Quincunx)
            {
                found.push(Yod {
                    sextile: [a, b],
                    apex,
                });
            }
        }
    }
    found
}

fn find_kites(graph: &AspectGraph, grand_trines: &[GrandTrine]) -> Vec<Kite> {
    let opposers = graph.participants(AspectKind::Opposition);
    let mut found = Vec::new();
    for trine in grand_trines {
        for &tail in &opposers {
            if trine.members.contains(&tail) {
                continue;
            }
            for (idx, &apex) in trine.members.iter().enumerate() {
                if !graph.has(tail, apex, AspectKind::Opposition) {
                    continue;
                }
                let flanks_sextile = trine
                    .members
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != idx)
                    .all(|(_, &vertex)| graph.has(tail, vertex, AspectKind::Sextile));
                if flanks_sextile {
                    found.push(Kite {
                        grand_trine: trine.members,
                        apex,
                        tail,
                    });
                }
            }
        }
    }
    found
}

fn find_grand_crosses(graph: &AspectGraph, positions: &PositionSet) -> Vec<GrandCross> {
    let oppositions = graph.pairs(AspectKind::Opposition);
    let square = AspectKind::Square;
    let mut found = Vec::new();
    for (p, &[a, b]) in oppositions.iter().enumerate() {
        for &[c, d] in &oppositions[p + 1..] {
            if c == a || c == b || d == a || d == b {
                continue;
            }
            let all_square = graph.has(a, c, square)
                && graph.has(a, d, square)
                && graph.has(b, c, square)
                && graph.has(b, d, square);
            if !all_square {
                continue;
            }
            let mut members = [a, b, c, d];
            members.sort();
            let modality = shared(
                members
                    .iter()
                    .map(|&body| sign_of(positions, body).map(|s| s.modality())),
            );
            found.push(GrandCross { members, modality });
        }
    }
    found
}
