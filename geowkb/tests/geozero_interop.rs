use geo_types::{line_string, point, polygon, Geometry, GeometryCollection, MultiPolygon};
use geowkb::{read_geometry, write_geometry};
use geowkb_types::Geom;
use geozero::wkb::Wkb;
use geozero::{CoordDimensions, ToGeo, ToWkb};

fn samples() -> Vec<Geometry<f64>> {
    let square = polygon![
        exterior: [
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 10.0),
            (x: 0.0, y: 0.0),
        ],
        interiors: [[(x: 2.0, y: 2.0), (x: 4.0, y: 2.0), (x: 4.0, y: 4.0), (x: 2.0, y: 2.0)]],
    ];

    vec![
        point!(x: 10.0, y: 20.0).into(),
        line_string![(x: 0.0, y: 0.0), (x: 1.5, y: -2.25), (x: 3.0, y: 4.0)].into(),
        square.clone().into(),
        MultiPolygon::new(vec![square.clone(), square]).into(),
        Geometry::GeometryCollection(GeometryCollection::new_from(vec![
            point!(x: 1.0, y: 1.0).into(),
            line_string![(x: 5.0, y: 5.0), (x: 6.0, y: 6.0)].into(),
        ])),
    ]
}

#[test]
fn reads_geozero_output() {
    for geo in samples() {
        let wkb = geo.to_wkb(CoordDimensions::xy()).unwrap();
        let geom = read_geometry(&wkb).unwrap();
        assert_eq!(Geometry::from(&geom), geo);
    }
}

#[test]
fn geozero_reads_our_output() {
    for geo in samples() {
        let wkb = write_geometry(&Geom::from(&geo)).unwrap();
        let decoded = Wkb(wkb).to_geo().unwrap();
        assert_eq!(decoded, geo);
    }
}

