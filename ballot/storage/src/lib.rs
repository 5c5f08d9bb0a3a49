mod codec;
mod counter;
mod item;
mod key;
mod map;
mod path;
mod prefix;

pub use {codec::*, counter::*, item::*, key::*, map::*, path::*, prefix::*};
