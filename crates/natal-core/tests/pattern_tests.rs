use natal_core::aspects::{AspectCalculator, AspectSettings};
use natal_core::patterns::{ChartPatterns, PatternDetector};
use natal_core::positions::{Body, ChartAngles, PositionSet};
use natal_core::zodiac::{Element, Modality, Sign};

fn detect(entries: &[(&str, f64)]) -> ChartPatterns {
    let positions =
        PositionSet::from_named(entries.iter().map(|&(name, lon)| (name, lon, false))).unwrap();
    let aspects = AspectCalculator::new().compute_body_aspects(&positions, &AspectSettings::default());
    PatternDetector::default().detect(&aspects, &positions)
}

#[test]
fn test_stellium_in_aries() {
    let patterns = detect(&[("sun", 2.0), ("moon", 15.0), ("mercury", 28.0), ("mars", 200.0)]);

    assert_eq!(patterns.stelliums.len(), 1);
    let stellium = &patterns.stelliums[0];
    assert_eq!(stellium.sign, Sign::Aries);
    assert_eq!(stellium.members, vec![Body::Sun, Body::Moon, Body::Mercury]);
}

#[test]
fn test_two_bodies_in_sign_is_not_stellium() {
    let patterns = detect(&[("sun", 2.0), ("moon", 15.0), ("mercury", 31.0)]);
    assert!(patterns.stelliums.is_empty());
}

#[test]
fn test_single_grand_trine() {
    let patterns = detect(&[("sun", 0.0), ("moon", 120.0), ("jupiter", 240.0)]);

    assert_eq!(patterns.grand_trines.len(), 1);
    let trine = patterns.grand_trines[0];
    assert_eq!(trine.members, [Body::Sun, Body::Moon, Body::Jupiter]);
    assert_eq!(trine.element, Some(Element::Fire));
}

#[test]
fn test_grand_trine_across_elements_has_no_element() {
    // 28° Aries, 2° Virgo, 0° Capricorn: fire, earth, earth
    let patterns = detect(&[("sun", 28.0), ("moon", 152.0), ("jupiter", 270.0)]);
    assert_eq!(patterns.grand_trines.len(), 1);
    assert_eq!(patterns.grand_trines[0].element, None);
}

#[test]
fn test_two_trine_bodies_are_not_grand_trine() {
    let patterns = detect(&[("sun", 0.0), ("moon", 120.0)]);
    assert!(patterns.grand_trines.is_empty());
    assert!(patterns.is_empty());
}

#[test]
fn test_t_square_with_modality() {
    let patterns = detect(&[("sun", 0.0), ("moon", 180.0), ("mars", 90.0)]);

    assert_eq!(patterns.t_squares.len(), 1);
    let t_square = patterns.t_squares[0];
    assert_eq!(t_square.opposition, [Body::Sun, Body::Moon]);
    assert_eq!(t_square.apex, Body::Mars);
    assert_eq!(t_square.modality, Some(Modality::Cardinal));
}

#[test]
fn test_yod() {
    let patterns = detect(&[("sun", 0.0), ("moon", 60.0), ("saturn", 210.0)]);

    assert_eq!(patterns.yods.len(), 1);
    let yod = patterns.yods[0];
    assert_eq!(yod.sextile, [Body::Sun, Body::Moon]);
    assert_eq!(yod.apex, Body::Saturn);
}

#[test]
fn test_kite() {
    let patterns = detect(&[("sun", 0.0), ("moon", 120.0), ("venus", 240.0), ("mars", 180.0)]);

    assert_eq!(patterns.grand_trines.len(), 1);
    assert_eq!(patterns.kites.len(), 1);
    let kite = patterns.kites[0];
    assert_eq!(kite.grand_trine, [Body::Sun, Body::Moon, Body::Venus]);
    assert_eq!(kite.apex, Body::Sun);
    assert_eq!(kite.tail, Body::Mars);
}

#[test]
fn test_grand_cross_and_its_t_squares() {
    let patterns = detect(&[("sun", 0.0), ("moon", 90.0), ("mars", 180.0), ("jupiter", 270.0)]);

    assert_eq!(patterns.grand_crosses.len(), 1);
    let cross = patterns.grand_crosses[0];
    assert_eq!(cross.members, [Body::Sun, Body::Moon, Body::Mars, Body::Jupiter]);
    assert_eq!(cross.modality, Some(Modality::Cardinal));
    // Each opposition with each of the two other corners
    assert_eq!(patterns.t_squares.len(), 4);
}

#[test]
fn test_detection_is_deterministic() {
    let entries = [
        ("sun", 0.0),
        ("moon", 120.0),
        ("venus", 240.0),
        ("mars", 180.0),
        ("mercury", 5.0),
        ("saturn", 90.0),
        ("pluto", 270.0),
    ];
    let mut reversed = entries;
    reversed.reverse();

    let first = detect(&entries);
    let second = detect(&entries);
    let third = detect(&reversed);

    assert_eq!(first, second);
    assert_eq!(first, third);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&third).unwrap()
    );
}

#[test]
fn test_angle_aspects_do_not_form_patterns() {
    let positions =
        PositionSet::from_named([("sun", 0.0, false), ("moon", 120.0, false)]).unwrap();
    let angles = ChartAngles::new(240.0, 300.0).unwrap();
    let settings = AspectSettings::default();
    let calculator = AspectCalculator::new();

    let mut aspects = calculator.compute_body_aspects(&positions, &settings);
    aspects.extend(calculator.compute_angle_aspects(&positions, &angles, &settings));

    let patterns = PatternDetector::default().detect(&aspects, &positions);
    assert!(patterns.grand_trines.is_empty());
}
