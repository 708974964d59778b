fn main() {
    pngchunks_bin::main()
}
