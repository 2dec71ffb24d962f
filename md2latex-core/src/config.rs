// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::Path;

use serde::Deserialize;

#[derive(Default, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub paper: PaperSize,
    pub link_color: LinkColor,
}

/// Paper sizes understood by `\geometry{}`.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letterpaper,
    A4paper,
    A5paper,
    B5paper,
    Legalpaper,
    Executivepaper,
}

impl PaperSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Letterpaper => "letterpaper",
            Self::A4paper => "a4paper",
            Self::A5paper => "a5paper",
            Self::B5paper => "b5paper",
            Self::Legalpaper => "legalpaper",
            Self::Executivepaper => "executivepaper",
        }
    }
}

/// Colors from the base `color` package, used for `hyperref`'s `urlcolor`.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkColor {
    #[default]
    Blue,
    Black,
    Red,
    Green,
    Cyan,
    Magenta,
}

impl LinkColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
        }
    }
}

pub fn load_options_from_yaml_file(path: &Path) -> crate::Result<Options> {
    let content = std::fs::read_to_string(path)?;
    let options = serde_yaml::from_str::<Options>(&content)?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 行为：空的 YAML 映射应得到默认选项。
    #[test]
    fn empty_mapping_is_default() {
        let options = serde_yaml::from_str::<Options>("{}").unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.paper.as_str(), "letterpaper");
        assert_eq!(options.link_color.as_str(), "blue");
    }

    // 行为：纸张与链接颜色按小写名称解析。
    #[test]
    fn parses_lowercase_names() {
        let options =
            serde_yaml::from_str::<Options>("paper: a4paper\nlink_color: magenta\n").unwrap();
        assert_eq!(options.paper, PaperSize::A4paper);
        assert_eq!(options.link_color, LinkColor::Magenta);
    }

    // 行为：不在白名单内的颜色会被拒绝，避免注入任意 LaTeX。
    #[test]
    fn rejects_unknown_color() {
        let result = serde_yaml::from_str::<Options>("link_color: \"blue}\\\\evil{\"\n");
        assert!(result.is_err());
    }

    // 行为：配置文件读取失败会返回 IO 错误。
    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options_from_yaml_file(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
