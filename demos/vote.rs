// SPDX short identifier: Unlicense

use rand::rngs::OsRng;

use lsag::{
    curve::Group,
    encoding::EncodedSignature,
    PrivateKey,
    Ring,
    signature::{
        RingSigner,
        RingVerifier,
        check_linkability
    },
};

const RINGSIZE: usize = 8;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    //The group is passed explicitly to everything that needs curve arithmetic.
    let group = Group::p256();

    //Create the voters' keys.
    //In practice these would come from a key provider,
    //but for demonstration they will just be randomly generated.
    let voters: Vec<PrivateKey> = (0..RINGSIZE)
        .map(|_| PrivateKey::generate(&group, &mut OsRng))
        .collect();

    //The ring is the set of eligible voters.
    let mut ring: Ring = Ring::new();
    for voter in &voters {
        ring.push(*voter.public_key());
    }

    //Signing needs a source of secure randomness.
    let mut signer = RingSigner::new(group, OsRng);
    let verifier = RingVerifier::new(group);

    //Cast a ballot as voter 5
    let ballot = signer.sign(&voters[5], &ring, b"vote:candidate1")
        .expect("Real software should have proper error handling.");

    //Anyone can check the ballot came from *someone* in the ring...
    assert!(verifier.verify(&ballot, &ring, b"vote:candidate1")
        .expect("Real software should have proper error handling."));

    //...but not that it was cast for a different candidate.
    assert!(!verifier.verify(&ballot, &ring, b"vote:candidate2").unwrap());

    //This is what gets published.
    let encoded = EncodedSignature::from(&ballot);
    println!("{}", serde_json::to_string_pretty(&encoded).unwrap());

    //Voter 5 tries to vote again.
    //Key images will always be the same when signing with the same key,
    //regardless of the ring or the message.
    let second_ballot = signer.sign(&voters[5], &ring, b"vote:candidate2").unwrap();
    assert!(verifier.verify(&second_ballot, &ring, b"vote:candidate2").unwrap());
    assert!(check_linkability(Some(&ballot), Some(&second_ballot)).unwrap());

    //A different voter is not linked.
    let other_ballot = signer.sign(&voters[2], &ring, b"vote:candidate2").unwrap();
    assert!(!check_linkability(Some(&ballot), Some(&other_ballot)).unwrap());
}
