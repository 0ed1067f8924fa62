use std::fmt::Display;
use std::io::{self, stdout, Write};
use std::slice;

/// Integer words the runtime knows how to print.
pub trait RuntimeInt: Copy + Display {}

macro_rules! runtime_int {
    ($($t:ty),*) => { $(impl RuntimeInt for $t {})* };
}

runtime_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Writes every value followed by a single space, then a newline unless `noeol` is set.
pub fn print<W, T>(out: &mut W, noeol: bool, values: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: RuntimeInt,
{
    for x in values {
        write!(out, "{} ", x)?;
    }
    if !noeol {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// `print` against the process stdout. Write failures are dropped.
pub fn print_stdout<T: RuntimeInt>(noeol: bool, values: &[T]) {
    let stdout = stdout();
    let mut lock = stdout.lock();
    if let Err(e) = print(&mut lock, noeol, values).and_then(|_| lock.flush()) {
        trace!("dropped stdout write error: {}", e);
    }
}

/// Entry point for generated code: prints `len` words starting at `values`.
///
/// # Safety
/// `values` must be null or point to at least `len` readable `i64`s.
#[no_mangle]
pub unsafe extern "C" fn __print(noeol: i64, values: *const i64, len: i64) {
    print_stdout(noeol != 0, words(values, len));
}

/// Views the words passed by generated code; null or non-positive `len` is empty.
///
/// # Safety
/// Same contract as `__print`.
pub unsafe fn words<'a>(values: *const i64, len: i64) -> &'a [i64] {
    if values.is_null() || len <= 0 {
        &[]
    } else {
        slice::from_raw_parts(values, len as usize)
    }
}

lazy_static! {
    pub static ref DEFAULT_RUNTIME: [(&'static str, usize); 1] = [
        ("__print", __print as *const () as usize),
    ];
}

pub fn symbol(name: &str) -> Option<usize> {
    DEFAULT_RUNTIME.iter().find(|(n, _)| *n == name).map(|(_, addr)| *addr)
}
