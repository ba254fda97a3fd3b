//! The `use prelude_plus::*;` line at the top of every module in the
//! workspace: the std items the GL code keeps reaching for, plus the logging,
//! error and bit-flag crates behind features.

pub use std::prelude::v1::*;

pub use std::borrow::Cow;
pub use std::cell::{Cell, RefCell};
pub use std::cmp;
pub use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
pub use std::convert::{TryFrom, TryInto};
pub use std::env;
pub use std::ffi::{self, CStr, CString, OsStr, OsString};
pub use std::fmt;
pub use std::fs::{self, File};
pub use std::hash::{Hash, Hasher};
pub use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
pub use std::iter;
pub use std::marker::PhantomData;
pub use std::mem;
pub use std::ops::{Deref, DerefMut, Range};
pub use std::os::raw::*;
pub use std::path::{Path, PathBuf};
pub use std::ptr;
pub use std::rc::{Rc, Weak as RcWeak};
pub use std::slice;
pub use std::str;

#[cfg(feature = "anyhow")]
pub use ::anyhow::{
  self, bail, ensure, format_err, Context as ResultContextExt, Error as AnyError,
  Result as AnyResult,
};
#[cfg(feature = "bitflags")]
pub use ::bitflags::bitflags;
#[cfg(feature = "log")]
pub use ::log::{self, debug, error, info, log, log_enabled, trace, warn, Level as LogLevel};
