/*!
 Errors that can happen when decoding property lists or reading values out of them.
*/

pub mod extract;
pub mod plist;
