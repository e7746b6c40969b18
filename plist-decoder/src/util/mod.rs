/*!
 This module defines utilities shared by the decoder and its consumers.
*/

pub mod dates;
pub mod extract;
