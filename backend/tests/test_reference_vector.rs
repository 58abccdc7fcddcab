//! Known-answer tests against the published PCG reference output

use pcg_core_rs::Generator64;

/// First 32 draws for seeds (42, 42, 54, 54)
const REFERENCE: [u64; 32] = [
    0xa15c02b71a410f65, 0x7b47f409e0b09a53, 0xba1d333011fba8ac, 0x83d2f293452993e9,
    0xbfa4784b36082c12, 0xcbed606ef5934191, 0xbfc6a3ad57d8966c, 0x812fff6db80de24a,
    0xe61f305a24b91bda, 0xf9384b90a56af4d2, 0x32db86feb6ca672f, 0x1dc035f927571abe,
    0xed78682682c952c1, 0x3822441dad4a4f6c, 0x2ba113d78f9980f4, 0x1c5b818b776e5403,
    0xa233956a00af3273, 0x84da65e33bfd2ee3, 0xced67292038cb94f, 0xb2c0fe063c815560,
    0x91817130fa9bbb8b, 0x55fe891791327bc8, 0x47e92091affd6be4, 0x486af29908d3c60e,
    0xb1e882bba1af1e12, 0xc261e84548dfb740, 0x1a9b90f686ba8b46, 0x7964e884f88f3f81,
    0x5f36d7a4220d7b8f, 0x1ee2052d3bce00a4, 0x8519f5d5b267296b, 0x293d4e4f14b72035,
];

#[test]
fn test_reference_sequence() {
    let mut rng = Generator64::with_seeds(42, 42, 54, 54);
    let values: Vec<u64> = (0..REFERENCE.len()).map(|_| rng.next()).collect();
    assert_eq!(values, REFERENCE);
}

#[test]
fn test_reseed_restarts_sequence() {
    let mut rng = Generator64::with_seeds(1, 2, 3, 4);
    for _ in 0..10 {
        rng.next();
    }

    rng.seed(42, 42, 54, 54);
    assert_eq!(rng.next(), REFERENCE[0]);
}

#[test]
fn test_same_seed_same_sequence() {
    let mut rng1 = Generator64::with_seeds(0xdead, 0xbeef, 7, 9);
    let mut rng2 = Generator64::with_seeds(0xdead, 0xbeef, 7, 9);

    for _ in 0..1000 {
        assert_eq!(rng1.next(), rng2.next(), "RNG not deterministic");
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = Generator64::with_seeds(1, 2, 3, 4);
    let mut rng2 = Generator64::with_seeds(1, 2, 3, 5);

    let a: Vec<u64> = (0..16).map(|_| rng1.next()).collect();
    let b: Vec<u64> = (0..16).map(|_| rng2.next()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_jump_back_replays_reference() {
    let mut rng = Generator64::with_seeds(42, 42, 54, 54);
    rng.advance(REFERENCE.len() as i64);
    rng.advance(-(REFERENCE.len() as i64));

    for expected in REFERENCE {
        assert_eq!(rng.next(), expected);
    }
}

#[test]
fn test_jump_ahead_into_reference() {
    let mut rng = Generator64::with_seeds(42, 42, 54, 54);
    rng.advance(17);
    assert_eq!(rng.next(), REFERENCE[17]);
}
