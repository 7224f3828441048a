use serde::{Deserialize, Serialize};
use std::fmt;

/// The JVM build tools an executor can be resolved for, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    /// A precompiled archive launched with `java -jar`
    Jar,
    Maven,
    Gradle,
    JBang,
    Sbt,
}

impl BuildTool {
    /// Every tool, ordered the way detection consults them
    pub const ALL: [BuildTool; 5] = [
        BuildTool::Jar,
        BuildTool::Maven,
        BuildTool::Gradle,
        BuildTool::JBang,
        BuildTool::Sbt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuildTool::Jar => "jar",
            BuildTool::Maven => "maven",
            BuildTool::Gradle => "gradle",
            BuildTool::JBang => "jbang",
            BuildTool::Sbt => "sbt",
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
