use web_sys::{DragEvent, FileList};

use postgrid_core::ImageRef;

/// Data-transfer format carrying the dragged tile's index.
pub(crate) const DRAG_PAYLOAD_KEY: &str = "imageIndex";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ReorderGesture {
    pub(crate) from: usize,
    pub(crate) to: usize,
}

pub(crate) fn parse_drag_payload(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// Turns a drop on tile `target` into a reorder, given the current number of
/// tiles. Self-drops, missing or foreign payloads and stale indices give
/// `None`.
pub(crate) fn resolve_drop(payload: Option<&str>, target: usize, len: usize) -> Option<ReorderGesture> {
    let from = parse_drag_payload(payload?)?;
    if from == target || from >= len || target >= len {
        return None;
    }
    Some(ReorderGesture { from, to: target })
}

pub(crate) fn write_drag_payload(event: &DragEvent, index: usize) {
    let Some(transfer) = event.data_transfer() else {
        return;
    };
    transfer.set_effect_allowed("move");
    if transfer
        .set_data(DRAG_PAYLOAD_KEY, &index.to_string())
        .is_err()
    {
        #[cfg(target_arch = "wasm32")]
        {
            gloo::console::warn!("drag: failed to set payload", index);
        }
    }
}

pub(crate) fn read_drag_payload(event: &DragEvent) -> Option<String> {
    let transfer = event.data_transfer()?;
    transfer.get_data(DRAG_PAYLOAD_KEY).ok()
}

/// Creates one object URL per picked file, in selection order. Files the
/// browser refuses to wrap are skipped.
pub(crate) fn object_urls_from_files(files: &FileList) -> Vec<ImageRef> {
    let mut refs = Vec::with_capacity(files.length() as usize);
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => refs.push(ImageRef::from(url)),
            Err(_err) => {
                #[cfg(target_arch = "wasm32")]
                {
                    gloo::console::warn!("upload: object url failed", file.name());
                }
            }
        }
    }
    refs
}
