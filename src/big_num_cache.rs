use lazy_static::*;

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = std::array::from_fn(|n| {
        BigInt::new(vec![n as u32], Sign::Positive)
    });
    // zero stays positive, so slot 0 mirrors POS_CACHE
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = std::array::from_fn(|n| {
        let sign = if n == 0 { Sign::Positive } else { Sign::Negative };
        BigInt::new(vec![n as u32], sign)
    });
    pub static ref ZERO: BigInt = POS_CACHE[0].clone();
    pub static ref ONE: BigInt = POS_CACHE[1].clone();
}
