mod fail_when_root_is_a_file;
mod ignore_modification_times;
mod report_entries_missing_from_either_side;
mod report_symlink_replaced_by_directory;
mod require_two_paths;
