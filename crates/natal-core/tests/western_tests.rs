use natal_core::positions::Body;
use natal_core::western::{
    chart_ruler, get_decan_info_from_longitude, ruler_of_sign_index, DignitiesService, Dignity,
    RulershipScheme,
};
use natal_core::zodiac::Sign;
use natal_core::EngineError;

#[test]
fn test_traditional_rulers_cover_all_signs() {
    let expected = [
        Body::Mars,
        Body::Venus,
        Body::Mercury,
        Body::Moon,
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Saturn,
        Body::Jupiter,
    ];
    for (idx, ruler) in expected.iter().enumerate() {
        assert_eq!(
            ruler_of_sign_index(idx as u8, RulershipScheme::Traditional),
            Ok(*ruler)
        );
    }
}

#[test]
fn test_ruler_rejects_bad_sign_index() {
    assert_eq!(
        ruler_of_sign_index(12, RulershipScheme::Modern),
        Err(EngineError::SignIndexOutOfRange(12))
    );
}

#[test]
fn test_chart_ruler_scorpio_rising() {
    let traditional = chart_ruler(215.0, RulershipScheme::Traditional).unwrap();
    let modern = chart_ruler(215.0, RulershipScheme::Modern).unwrap();
    assert_eq!(traditional.rising_sign, Sign::Scorpio);
    assert_eq!(traditional.ruler, Body::Mars);
    assert_eq!(modern.ruler, Body::Pluto);
}

#[test]
fn test_chart_ruler_rejects_out_of_range_ascendant() {
    assert!(matches!(
        chart_ruler(400.0, RulershipScheme::Traditional),
        Err(EngineError::LongitudeOutOfRange { .. })
    ));
}

#[test]
fn test_dignities_sun() {
    let service = DignitiesService::default();
    assert_eq!(service.get_dignities(Body::Sun, 135.0).primary, Dignity::Domicile); // Leo
    assert_eq!(service.get_dignities(Body::Sun, 10.0).primary, Dignity::Exaltation); // Aries
    assert_eq!(service.get_dignities(Body::Sun, 310.0).primary, Dignity::Detriment); // Aquarius
    assert_eq!(service.get_dignities(Body::Sun, 190.0).primary, Dignity::Fall); // Libra
    assert_eq!(service.get_dignities(Body::Sun, 70.0).primary, Dignity::Peregrine); // Gemini
}

#[test]
fn test_dignities_exact_exaltation() {
    let service = DignitiesService::default();
    // Sun at 19° Aries (exact exaltation)
    let report = service.get_dignities(Body::Sun, 19.0);
    assert!(report.exact_exaltation);
    // Venus at 359° is within 2° of 357°
    assert!(service.get_dignities(Body::Venus, 359.0).exact_exaltation);
    assert!(!service.get_dignities(Body::Sun, 25.0).exact_exaltation);
}

#[test]
fn test_outer_planets_depend_on_scheme() {
    let traditional = DignitiesService::new(RulershipScheme::Traditional);
    let modern = DignitiesService::new(RulershipScheme::Modern);

    assert_eq!(traditional.classify(Body::Pluto, Sign::Scorpio), vec![Dignity::Peregrine]);
    assert_eq!(modern.classify(Body::Pluto, Sign::Scorpio), vec![Dignity::Domicile]);
    assert_eq!(modern.classify(Body::Uranus, Sign::Leo), vec![Dignity::Detriment]);
}

#[test]
fn test_nodes_are_peregrine() {
    let service = DignitiesService::new(RulershipScheme::Modern);
    for sign in natal_core::zodiac::ALL_SIGNS {
        assert_eq!(service.classify(Body::MeanNode, sign), vec![Dignity::Peregrine]);
    }
}

#[test]
fn test_decan_info_from_longitude() {
    let info = get_decan_info_from_longitude(5.0); // 5° Aries
    assert_eq!(info.sign, Sign::Aries);
    assert_eq!(info.decan_index, 1);

    let info = get_decan_info_from_longitude(145.0); // 25° Leo
    assert_eq!(info.decan_index, 3);
    assert_eq!(info.decan_ruler, Body::Mars);
}
