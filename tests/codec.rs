use densemat::matrix::codec::{decode, encode, Encoded};
use densemat::{Matrix, RefMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn json_round_trip_is_exact() {
    let mut rng = StdRng::seed_from_u64(5);
    for (m, n) in [(1, 1), (2, 3), (7, 4), (16, 1)] {
        let data: Vec<f64> = (0..m * n).map(|_| rng.gen_range(-1e6..1e6)).collect();
        let a = Matrix::from_vec(data, m, n).unwrap();

        let json = serde_json::to_string(&a).unwrap();
        let back: Matrix<'static> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, a);
        assert!(back.iter().zip(a.iter()).all(|(x, y)| x.to_bits() == y.to_bits()));
        assert_eq!(back.mode(), RefMode::Copied);
    }
}

#[test]
fn wire_shape_is_rows_columns_data() {
    let a = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    let value = serde_json::to_value(&a).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "rows": 2, "columns": 3, "data": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] })
    );

    let encoded = encode(&a).unwrap();
    assert_eq!(encoded, Encoded { rows: 2, columns: 3, data: a.to_vec() });
}

#[test]
fn borrowed_matrix_serializes_its_contents() {
    let mut raw = vec![0.5, -0.5];
    let a = Matrix::borrowing(&mut raw, 2, 1).unwrap();
    let back = decode(encode(&a).unwrap()).unwrap();
    assert_eq!(back, a);
}

#[test]
fn inconsistent_payload_fails_to_decode() {
    let short = r#"{ "rows": 2, "columns": 2, "data": [1.0, 2.0, 3.0] }"#;
    let err = serde_json::from_str::<Matrix<'static>>(short).unwrap_err();
    assert!(err.to_string().contains("carries 3 values"));

    let negative = r#"{ "rows": -2, "columns": 2, "data": [] }"#;
    assert!(serde_json::from_str::<Matrix<'static>>(negative).is_err());

    let err = decode(Encoded { rows: 3, columns: 1, data: vec![0.0; 4] }).unwrap_err();
    assert!(err.is_format());
}
