// SPDX short identifier: Unlicense

use rand::thread_rng;

#[cfg(feature = "to_bytes")]
use lsag::ToBytes;
use lsag::{
    common::*,
    encoding::*,
    signature::{
        RingSigner,
        RingVerifier
    }
};

fn signed_fixture(group: &Group) -> (Ring, EncodedSignature) {
    let keys: Vec<PrivateKey> = (0..3)
        .map(|_| PrivateKey::generate(group, &mut thread_rng()))
        .collect();
    let ring: Ring = keys.iter().map(|key| *key.public_key()).collect::<Vec<PublicKey>>().into();
    let sig = RingSigner::new(*group, thread_rng()).sign(&keys[1], &ring, b"vote:candidate1").unwrap();
    return (ring, EncodedSignature::from(&sig))
}

#[test]
fn signature_json() {
    let group = Group::p256();
    let (ring, encoded) = signed_fixture(&group);

    let json = serde_json::to_string(&encoded).unwrap();
    assert!(json.contains("\"keyImage\""));

    let parsed: EncodedSignature = serde_json::from_str(&json).unwrap();
    let sig = parsed.decode_for_ring(&group, ring.len()).unwrap();
    assert!(RingVerifier::new(group).verify(&sig, &ring, b"vote:candidate1").unwrap());

    //all values are fixed-width lowercase hex
    for value in encoded.c.iter().chain(encoded.r.iter()).chain([&encoded.key_image.x, &encoded.key_image.y]) {
        assert_eq!(value.len(), 64);
        assert_eq!(value, &value.to_lowercase());
    }
}

#[cfg(feature = "to_bytes")]
#[test]
fn signature_bytes() {
    let group = Group::p256();
    let (ring, encoded) = signed_fixture(&group);

    let serialized = encoded.to_bytes().unwrap();
    let deserialized = EncodedSignature::from_bytes(&serialized).unwrap();
    assert_eq!(deserialized, encoded);
    deserialized.decode_for_ring(&group, ring.len()).unwrap();

    assert!(EncodedSignature::from_bytes(&serialized[..serialized.len() / 2]).is_err());
}

#[test]
fn rejects_mismatched_lengths() {
    let group = Group::p256();
    let (ring, encoded) = signed_fixture(&group);

    let mut short_c = encoded.clone();
    short_c.c.pop();
    assert_eq!(short_c.decode(&group), Err(SignatureError::RingSizeMismatch));

    let mut long_r = encoded.clone();
    long_r.r.push(long_r.r[0].clone());
    assert_eq!(long_r.decode(&group), Err(SignatureError::RingSizeMismatch));

    //never truncated or padded to fit the ring
    assert_eq!(encoded.decode_for_ring(&group, ring.len() + 1), Err(SignatureError::RingSizeMismatch));
    assert_eq!(encoded.decode_for_ring(&group, ring.len() - 1), Err(SignatureError::RingSizeMismatch));
}

#[test]
fn rejects_malformed_values() {
    let group = Group::p256();
    let (_, encoded) = signed_fixture(&group);

    let mut bad_hex = encoded.clone();
    bad_hex.c[0] = "zz".to_owned();
    assert_eq!(bad_hex.decode(&group), Err(SignatureError::Encoding(SerializationError::InvalidHex)));

    let mut too_long = encoded.clone();
    too_long.r[1] = "0".repeat(65);
    assert_eq!(too_long.decode(&group), Err(SignatureError::Encoding(SerializationError::InvalidLength)));

    //the group order itself is not a canonical scalar
    let mut order = encoded.clone();
    order.r[0] = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551".to_owned();
    assert_eq!(order.decode(&group), Err(SignatureError::Encoding(SerializationError::NonCanonicalScalar)));

    let mut off_curve = encoded.clone();
    off_curve.key_image.y = "01".to_owned();
    assert_eq!(off_curve.decode(&group), Err(SignatureError::Encoding(SerializationError::InvalidPoint)));
}

#[test]
fn accepts_short_and_prefixed_hex() {
    let group = Group::p256();
    assert_eq!(decode_scalar(&group, "0x2a").unwrap(), Scalar::from(42u64));
    assert_eq!(decode_scalar(&group, "2a").unwrap(), Scalar::from(42u64));
    assert_eq!(decode_scalar(&group, "a").unwrap(), Scalar::from(10u64));
    assert_eq!(encode_scalar(&Scalar::from(42u64)), format!("{:0>64}", "2a"));
    assert_eq!(decode_bytes(""), Err(SerializationError::InvalidLength));
    assert_eq!(decode_bytes("0x"), Err(SerializationError::InvalidLength));
}

#[test]
fn public_key_encoding() {
    let group = Group::p256();
    let key = PrivateKey::generate(&group, &mut thread_rng());
    let encoded = EncodedPublicKey::from(key.public_key());
    assert_eq!(encoded.curve, "p256");

    let json = serde_json::to_string(&encoded).unwrap();
    let parsed: EncodedPublicKey = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed.decode(&group).unwrap(), key.public_key());

    //generator coordinates decode to G
    let generator = EncodedPublicKey {
        x: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296".to_owned(),
        y: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5".to_owned(),
        curve: "p256".to_owned()
    };
    assert_eq!(generator.decode(&group).unwrap().to_point(), group.generator());

    let mut wrong_curve = generator.clone();
    wrong_curve.curve = "secp256k1".to_owned();
    assert_eq!(wrong_curve.decode(&group), Err(SerializationError::CurveMismatch("secp256k1".to_owned())));

    let mut off_curve = generator.clone();
    off_curve.y = off_curve.x.clone();
    assert_eq!(off_curve.decode(&group), Err(SerializationError::InvalidPoint));

    let ring = decode_ring(&group, &[parsed, generator.clone()]).unwrap();
    assert_eq!(ring.len(), 2);
    assert!(decode_ring(&group, &[generator, off_curve]).is_err());
}

#[test]
fn key_provider_format() {
    let group = Group::p256();

    //keys as emitted by an external key provider, hex with leading zeros stripped
    let point = EncodedPublicKey {
        x: "986ae2506f1ff104d04230861d8f4b498f4bc4c6d009b30f7544dc129b82d28d".to_owned(),
        y: "3cccc0a6460e0ae328a4d97d3c7b61d86fc6289c189f2525110c441bb07e97".to_owned(),
        curve: "p256".to_owned()
    };
    let key = point.decode(&group).unwrap();
    assert_eq!(key.to_point(), group.mul_generator(&Scalar::from(43u64)));

    //re-encoding restores the fixed width
    let encoded = EncodedPublicKey::from(&key);
    assert_eq!(encoded.y, format!("{:0>64}", point.y));
    assert_eq!(encoded.decode(&group).unwrap(), key);

    let prefixed = EncodedPublicKey {
        x: format!("0x{}", point.x),
        y: format!("0x{}", point.y),
        curve: "p256".to_owned()
    };
    assert_eq!(prefixed.decode(&group).unwrap(), key);
}
