/// Macro to create a [`MortalityTable`](crate::mort_table::MortalityTable)
/// from literal age/qx columns.
///
/// Usage:
/// ```rust
/// # use lifeval::prelude::*;
/// let table = mort_df! {
///     "age" => [25_u32, 26, 27],
///     "qx" => [0.000767_f64, 0.000771, 0.000776],
/// }?;
/// # LifevalResult::Ok(())
/// ```
#[macro_export]
macro_rules! mort_df {
    ($($name:expr => $val:expr),+ $(,)?) => {{
        use polars::prelude::df;
        let df_result = df! { $($name => $val),+ };
        match df_result {
            Ok(df) => $crate::mort_table::MortalityTable::from_df().df(df).call(),
            Err(e) => Err(e.into()),
        }
    }};
}
