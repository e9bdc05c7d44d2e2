/// Command-line arguments.
use clap::Parser;
use latest_core::model::{RequestError, SelectionRequest};

const KIND_HELP: &str = "\
Kinds:
  doc, xls, ppt, zip       office and archive families, matched by exact MIME type
  image, audio, video, text
                           any MIME type with that major type (e.g. image/png)
  <other>                  any other word is compared with the MIME major type

Patterns are expanded by latest itself; quote them to use ** for recursion.
Exit status is 1 when nothing is selected, unless -0 is given.";

#[derive(Parser, Debug)]
#[command(
    name = "latest",
    version,
    about = "Select the newest or oldest files by modification time.",
    after_help = KIND_HELP
)]
pub struct Args {
    /// Files or glob patterns.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Select the N most recently modified files [default: 1].
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
        conflicts_with = "oldest"
    )]
    pub newest: Option<u64>,

    /// Select the N least recently modified files.
    #[arg(
        short = 'o',
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub oldest: Option<u64>,

    /// Only consider files of this kind (see below).
    #[arg(short, long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Suppress diagnostic output on stderr.
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit successfully even when no file is selected.
    #[arg(short = '0', long = "allow-empty-result")]
    pub allow_empty_result: bool,
}

impl Args {
    /// Validate the flags and split off the positional patterns.
    pub fn into_request(self) -> Result<(SelectionRequest, Vec<String>), RequestError> {
        let request = SelectionRequest::from_flags(
            self.newest,
            self.oldest,
            self.kind.as_deref(),
            self.allow_empty_result,
            self.quiet,
        )?;
        Ok((request, self.files))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use latest_core::model::Direction;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("latest").chain(argv.iter().copied()))
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_newest_one() {
        let (req, files) = parse(&["*.pdf"]).unwrap().into_request().unwrap();
        assert_eq!(req.direction(), Direction::Newest);
        assert_eq!(req.count(), 1);
        assert_eq!(files, ["*.pdf"]);
    }

    #[test]
    fn short_flags() {
        let args = parse(&["-o", "3", "-k", "Image", "-q", "-0", "a", "b"]).unwrap();
        let (req, files) = args.into_request().unwrap();
        assert_eq!(req.direction(), Direction::Oldest);
        assert_eq!(req.count(), 3);
        assert_eq!(req.kind().map(|k| k.keyword()), Some("image"));
        assert!(req.quiet());
        assert!(req.allow_empty());
        assert_eq!(files, ["a", "b"]);
    }

    #[test]
    fn long_flags() {
        let args = parse(&["--newest", "4", "--kind", "zip", "--allow-empty-result", "x"]).unwrap();
        let (req, _) = args.into_request().unwrap();
        assert_eq!(req.direction(), Direction::Newest);
        assert_eq!(req.count(), 4);
        assert!(req.allow_empty());
        assert!(!req.quiet());
    }

    #[test]
    fn newest_and_oldest_conflict() {
        let err = parse(&["-n", "1", "-o", "1", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = parse(&["-n", "0", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn files_are_required() {
        let err = parse(&["-n", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn version_flag_short_circuits() {
        let err = parse(&["--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
