use std::path::PathBuf;

/// Extensions offered by the wardrobe picker
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// Files chosen in "Upload Your Wardrobe".
/// Paths are only remembered; the files are never opened.
#[derive(Debug, Clone, Default)]
pub struct UploadState {
    pub picked: Vec<PathBuf>,
}

impl UploadState {
    pub fn record(&mut self, files: Vec<PathBuf>) {
        self.picked = files;
    }

    pub fn status(&self) -> String {
        match self.picked.len() {
            0 => "No files selected".to_string(),
            1 => "1 file selected".to_string(),
            n => format!("{} files selected", n),
        }
    }
}

/// Show the native multi-file picker.
/// Resolves to an empty list if the dialog is cancelled.
pub async fn pick_wardrobe_images() -> Vec<PathBuf> {
    let files = rfd::AsyncFileDialog::new()
        .set_title("Select Wardrobe Photos")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_files()
        .await;

    files
        .unwrap_or_default()
        .into_iter()
        .map(|handle| handle.path().to_path_buf())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_files() {
        let mut upload = UploadState::default();
        assert_eq!(upload.status(), "No files selected");

        upload.record(vec![PathBuf::from("a.jpg")]);
        assert_eq!(upload.status(), "1 file selected");

        upload.record(vec![PathBuf::from("a.jpg"), PathBuf::from("b.png")]);
        assert_eq!(upload.status(), "2 files selected");
    }
}
