use lazy_static::*;

use crate::big_integer_constants::*;
use crate::BigInteger;

lazy_static! {
    pub static ref POS_CACHE: [BigInteger; MAX_CONSTANT + 1] = [
        unsafe { BigInteger::from_raw(vec![  ], false) },
        unsafe { BigInteger::from_raw(vec![ 1], false) },
        unsafe { BigInteger::from_raw(vec![ 2], false) },
        unsafe { BigInteger::from_raw(vec![ 3], false) },
        unsafe { BigInteger::from_raw(vec![ 4], false) },
        unsafe { BigInteger::from_raw(vec![ 5], false) },
        unsafe { BigInteger::from_raw(vec![ 6], false) },
        unsafe { BigInteger::from_raw(vec![ 7], false) },
        unsafe { BigInteger::from_raw(vec![ 8], false) },
        unsafe { BigInteger::from_raw(vec![ 9], false) },
        unsafe { BigInteger::from_raw(vec![10], false) },
        unsafe { BigInteger::from_raw(vec![11], false) },
        unsafe { BigInteger::from_raw(vec![12], false) },
        unsafe { BigInteger::from_raw(vec![13], false) },
        unsafe { BigInteger::from_raw(vec![14], false) },
        unsafe { BigInteger::from_raw(vec![15], false) },
        unsafe { BigInteger::from_raw(vec![16], false) },
    ];
    pub static ref NEG_CACHE: [BigInteger; MAX_CONSTANT + 1] = [
        unsafe { BigInteger::from_raw(vec![  ], false) },
        unsafe { BigInteger::from_raw(vec![ 1], true) },
        unsafe { BigInteger::from_raw(vec![ 2], true) },
        unsafe { BigInteger::from_raw(vec![ 3], true) },
        unsafe { BigInteger::from_raw(vec![ 4], true) },
        unsafe { BigInteger::from_raw(vec![ 5], true) },
        unsafe { BigInteger::from_raw(vec![ 6], true) },
        unsafe { BigInteger::from_raw(vec![ 7], true) },
        unsafe { BigInteger::from_raw(vec![ 8], true) },
        unsafe { BigInteger::from_raw(vec![ 9], true) },
        unsafe { BigInteger::from_raw(vec![10], true) },
        unsafe { BigInteger::from_raw(vec![11], true) },
        unsafe { BigInteger::from_raw(vec![12], true) },
        unsafe { BigInteger::from_raw(vec![13], true) },
        unsafe { BigInteger::from_raw(vec![14], true) },
        unsafe { BigInteger::from_raw(vec![15], true) },
        unsafe { BigInteger::from_raw(vec![16], true) },
    ];
}
