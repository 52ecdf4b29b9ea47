mod write_patches_at_depth;
