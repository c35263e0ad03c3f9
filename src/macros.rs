/// Generate the `*_inplace` twin of each copying verb
///
/// The twin runs the copying verb and swaps its result into `self.store`, so
/// a failed call leaves the receiver untouched.
macro_rules! inplace_variants {
    ($ty:ident { $( $verb:ident => $inplace:ident ( $( $arg:ident : $argty:ty ),* ); )* }) => {
        impl $ty {
            $(
                #[doc = concat!("In-place form of [`", stringify!($ty), "::", stringify!($verb), "`]")]
                pub fn $inplace(&mut self, $( $arg: $argty ),*) -> $crate::error::Result<()> {
                    let out = Self::$verb(self, $( $arg ),*)?;
                    self.store.replace_with(out.store);
                    Ok(())
                }
            )*
        }
    };
}
