// SPDX short identifier: Unlicense

use std::collections::HashSet;

use rand::thread_rng;

use lsag::{
    common::*,
    signature::{
        LSAGSignature,
        RingSigner,
        RingVerifier,
        check_linkability
    }
};

fn random_ring(group: &Group, n: usize) -> Ring {
    return (0..n)
        .map(|_| *PrivateKey::generate(group, &mut thread_rng()).public_key())
        .collect::<Vec<PublicKey>>()
        .into()
}

fn sign(group: &Group, key: &PrivateKey, ring: &Ring, msg: &[u8]) -> LSAGSignature {
    return RingSigner::new(*group, thread_rng()).sign(key, ring, msg).unwrap()
}

#[test]
fn same_key_is_linked() {
    let group = Group::p256();
    let key = PrivateKey::generate(&group, &mut thread_rng());

    //different messages, different rings, different positions
    let mut ring_1 = random_ring(&group, 4);
    ring_1.insert(0, *key.public_key());
    let mut ring_2 = random_ring(&group, 7);
    ring_2.insert(5, *key.public_key());

    let sig_1 = sign(&group, &key, &ring_1, b"m1");
    let sig_2 = sign(&group, &key, &ring_2, b"m2");

    assert_eq!(check_linkability(Some(&sig_1), Some(&sig_2)), Ok(true));
    assert_eq!(check_linkability(Some(&sig_2), Some(&sig_1)), Ok(true));
    assert_eq!(check_linkability(Some(&sig_1), Some(&sig_1)), Ok(true));
}

#[test]
fn different_keys_are_not_linked() {
    let group = Group::p256();
    let keys: Vec<PrivateKey> = (0..16)
        .map(|_| PrivateKey::generate(&group, &mut thread_rng()))
        .collect();
    let ring: Ring = keys.iter().map(|key| *key.public_key()).collect::<Vec<PublicKey>>().into();

    let signatures: Vec<LSAGSignature> = keys.iter()
        .map(|key| sign(&group, key, &ring, b"m1"))
        .collect();

    //every pair of distinct signers has a distinct key image
    for (i, first) in signatures.iter().enumerate() {
        for (j, second) in signatures.iter().enumerate() {
            assert_eq!(check_linkability(Some(first), Some(second)), Ok(i == j));
        }
    }
    let images: HashSet<KeyImage> = signatures.iter().map(|sig| sig.key_image).collect();
    assert_eq!(images.len(), keys.len());
}

#[test]
fn linkability_does_not_verify() {
    let group = Group::p256();
    let key = PrivateKey::generate(&group, &mut thread_rng());
    let mut ring = random_ring(&group, 3);
    ring.push(*key.public_key());

    let valid = sign(&group, &key, &ring, b"m1");
    //same key image, garbage chain
    let forged = LSAGSignature::from_parts(
        valid.key_image,
        vec!(Scalar::ONE; ring.len()),
        vec!(Scalar::ONE; ring.len())
    ).unwrap();

    assert_eq!(check_linkability(Some(&valid), Some(&forged)), Ok(true));
    assert!(!RingVerifier::new(group).verify(&forged, &ring, b"m1").unwrap());
}

#[test]
fn missing_signature() {
    let group = Group::p256();
    let key = PrivateKey::generate(&group, &mut thread_rng());
    let mut ring = random_ring(&group, 2);
    ring.push(*key.public_key());
    let sig = sign(&group, &key, &ring, b"m1");

    assert_eq!(check_linkability(Some(&sig), None), Err(SignatureError::MissingSignature));
    assert_eq!(check_linkability(None, Some(&sig)), Err(SignatureError::MissingSignature));
    assert_eq!(check_linkability(None, None), Err(SignatureError::MissingSignature));
}
