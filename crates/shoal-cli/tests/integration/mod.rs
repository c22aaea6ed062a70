mod binary;
mod instance_files;
