mod export;
mod ingest;

pub use {
    export::{SHEETS, WindowsFile, export_report},
    ingest::{
        frame_to_events, load_frame, load_workbook, normalize_row, parse_plays, read_report,
        rows_to_frame,
    },
};
