//! Rendering of the hashed records. Argument mode prints bare records for
//! scripting; interactive mode prints ready-to-paste kickstart directives.

use crate::crypt::{Algorithm, HashRecord};

/// How the records are formatted on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One encoded record per line, nothing else.
    Plain,
    /// For each scheme: a blank line, a `# <name>` comment, and a
    /// `rootpw --iscrypted <record>` directive line.
    Kickstart,
}

impl OutputMode {
    pub fn render(self, records: &[(Algorithm, HashRecord)]) -> String {
        let mut out = String::new();
        for (algorithm, record) in records {
            match self {
                OutputMode::Plain => {
                    out.push_str(record.as_str());
                    out.push('\n');
                }
                OutputMode::Kickstart => {
                    out.push('\n');
                    out.push_str("# ");
                    out.push_str(algorithm.label());
                    out.push('\n');
                    out.push_str("rootpw --iscrypted ");
                    out.push_str(record.as_str());
                    out.push('\n');
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::OutputMode;
    use crate::crypt::{Algorithm, HashRecord};

    fn sample_records() -> Vec<(Algorithm, HashRecord)> {
        vec![
            (Algorithm::Md5, HashRecord::new("$1$aaaa$md5digest".to_string())),
            (Algorithm::Sha256, HashRecord::new("$5$bbbb$sha256digest".to_string())),
            (Algorithm::Sha512, HashRecord::new("$6$cccc$sha512digest".to_string())),
        ]
    }

    #[test]
    fn plain_mode_prints_one_record_per_line() {
        let rendered = OutputMode::Plain.render(&sample_records());
        assert_eq!(
            rendered,
            "$1$aaaa$md5digest\n$5$bbbb$sha256digest\n$6$cccc$sha512digest\n"
        );
    }

    #[test]
    fn kickstart_mode_prints_commented_directives() {
        let rendered = OutputMode::Kickstart.render(&sample_records());
        assert_eq!(
            rendered,
            "\n# md5\nrootpw --iscrypted $1$aaaa$md5digest\n\
             \n# sha256\nrootpw --iscrypted $5$bbbb$sha256digest\n\
             \n# sha512\nrootpw --iscrypted $6$cccc$sha512digest\n"
        );
    }
}
