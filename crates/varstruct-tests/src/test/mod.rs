mod obs;
mod reflect;
