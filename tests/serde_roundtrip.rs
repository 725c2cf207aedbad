//! JSON round trips for every public type, proving the serialized field
//! layout stays in declaration order and survives an exact round trip.

use vecmat::prelude::*;

fn roundtrip<T>(value: T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let json = serde_json::to_string(&value).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn vectors_roundtrip_exactly() {
    let v2 = Vec2::new(1.5_f32, -2.25);
    assert_eq!(roundtrip(v2), v2);

    let v3 = Vec3::new(1.5_f64, -2.25, 1.0e-3);
    assert_eq!(roundtrip(v3), v3);

    let v4 = Vec4::new(-7_i32, 0, 3, 12);
    assert_eq!(roundtrip(v4), v4);
}

#[test]
fn quaternions_roundtrip_exactly() {
    let q = Quat::axis_angle_deg(Vec3::<f64>::up(), 33.0);
    assert_eq!(roundtrip(q), q);
    assert_eq!(roundtrip(Quat::<f32>::identity()), Quat::identity());
}

#[test]
fn matrices_roundtrip_exactly() {
    let m3 = Mat3::<f64>::identity().transpose() * 3.5;
    assert_eq!(roundtrip(m3), m3);

    let m4 = Mat4::<f32>::perspective(1.2, 16.0 / 9.0, 0.1, 100.0);
    assert_eq!(roundtrip(m4), m4);

    let m4i = Mat4::<i32>::make(-4);
    assert_eq!(roundtrip(m4i), m4i);
}

#[test]
fn fields_serialize_in_declaration_order() {
    let json = serde_json::to_string(&Vec3::new(1, 2, 3)).unwrap();
    assert_eq!(json, r#"{"x":1,"y":2,"z":3}"#);

    let json = serde_json::to_string(&Quat::new(1, 2, 3, 4)).unwrap();
    assert_eq!(json, r#"{"x":1,"y":2,"z":3,"w":4}"#);

    let json = serde_json::to_string(&Mat3::<i32>::identity()).unwrap();
    assert_eq!(
        json,
        r#"{"_00":1,"_01":0,"_02":0,"_10":0,"_11":1,"_12":0,"_20":0,"_21":0,"_22":1}"#
    );
}

#[test]
fn deserializes_from_handwritten_json() {
    let v: Vec2<f64> = serde_json::from_str(r#"{"x": 3.0, "y": 4.0}"#).unwrap();
    assert_eq!(v.length(), 5.0);

    let q: Quat<f64> = serde_json::from_str(r#"{"x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0}"#).unwrap();
    assert_eq!(q, Quat::identity());
}
