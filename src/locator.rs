//! Conventional locations of the build files inside a React Native style project.

use std::path::{Path, PathBuf};

/// Android build script, relative to the project root
pub const ANDROID_BUILD_GRADLE: &str = "android/app/build.gradle";

/// Directory holding the Xcode project, relative to the project root
pub const IOS_PROJECT_DIR: &str = "ios";

/// Suffix appended to the project name to reach the pbxproj file
pub const IOS_PBXPROJ_SUFFIX: &str = ".xcodeproj/project.pbxproj";

/// Path of the Android build script under `root`.
pub fn android_build_gradle(root: &Path, relative: &str) -> PathBuf {
    root.join(relative)
}

/// Path of `<ios_dir>/<project_name>.xcodeproj/project.pbxproj` under `root`.
pub fn ios_pbxproj(root: &Path, ios_dir: &str, project_name: &str) -> PathBuf {
    root.join(ios_dir)
        .join(format!("{}{}", project_name, IOS_PBXPROJ_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_default_path() {
        let path = android_build_gradle(Path::new("."), ANDROID_BUILD_GRADLE);
        assert_eq!(path, PathBuf::from("./android/app/build.gradle"));
    }

    #[test]
    fn test_ios_path_uses_project_name() {
        let path = ios_pbxproj(Path::new("."), IOS_PROJECT_DIR, "MyApp");
        assert_eq!(
            path,
            PathBuf::from("./ios/MyApp.xcodeproj/project.pbxproj")
        );
    }

    #[test]
    fn test_paths_follow_root() {
        let root = Path::new("/work/app");
        assert_eq!(
            android_build_gradle(root, ANDROID_BUILD_GRADLE),
            PathBuf::from("/work/app/android/app/build.gradle")
        );
        assert_eq!(
            ios_pbxproj(root, "native/ios", "Shop"),
            PathBuf::from("/work/app/native/ios/Shop.xcodeproj/project.pbxproj")
        );
    }
}
