use std::io::Write;
use std::path::Path;

use goldenfile::Mint;

use crate::cmd::convert_file;
use crate::filespec::FileSpec;

const TESTDATA: &str = "testdata/importers";

/// Converts `testdata/importers/<input_name>` and compares the output, as the
/// command would write it, with the golden file of the same directory.
pub fn golden_test(input_name: &str, golden_name: &str) {
    let mut mint = Mint::new(TESTDATA);
    let differ = Box::new(goldenfile::differs::text_diff);
    let mut out = mint
        .new_goldenfile_with_differ(golden_name, differ)
        .expect("new goldenfile");

    let input = FileSpec::Path(Path::new(TESTDATA).join(input_name));
    let batch = convert_file(&input).expect("perform conversion");

    writeln!(out, "{}", batch).expect("write output");
}

#[macro_export]
macro_rules! assert_qif_eq {
    ($want:expr, $got:expr) => {
        let want_str = format!("{}", $want);
        let got_str = format!("{}", $got);
        if want_str != got_str {
            text_diff::assert_diff(&want_str, &got_str, "\n", 0);
        }
    };
}
